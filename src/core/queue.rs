//! Submission queue between producer threads and the flush task
//!
//! An unbounded crossbeam channel: `push` never blocks and never fails while
//! the queue is alive. Only the flush task pops.

use super::log_entry::LogEntry;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

pub struct SubmissionQueue {
    sender: Sender<LogEntry>,
    receiver: Receiver<LogEntry>,
}

impl SubmissionQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Append an entry without blocking.
    #[inline]
    pub fn push(&self, entry: LogEntry) {
        // Both ends live in `self`, so the channel cannot be disconnected here
        let _ = self.sender.send(entry);
    }

    /// Take the oldest entry, if any.
    #[inline]
    pub fn pop(&self) -> Option<LogEntry> {
        match self.receiver.try_recv() {
            Ok(entry) => Some(entry),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for SubmissionQueue {
    fn default() -> Self {
        Self::new()
    }
}
