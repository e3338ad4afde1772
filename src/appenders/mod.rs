//! Output targets driven by the flush task

pub mod console;
pub mod rotating_file;

pub use console::ConsoleEcho;
pub use rotating_file::RotatingFileAppender;
