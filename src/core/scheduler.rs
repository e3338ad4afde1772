//! Periodic flush trigger
//!
//! A named background thread fires the task every `period` until stopped.
//! Firings never pile up: the ticker holds at most one pending tick, so a
//! task that overruns the period just misses the ticks that elapsed meanwhile.

use super::error::{LoggerError, Result};
use crossbeam_channel::{bounded, select, tick, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const THREAD_NAME: &str = "daylog-flush";

pub struct FlushScheduler {
    period: Duration,
    /// Dropping the sender disconnects the channel, which stops the loop
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl FlushScheduler {
    pub fn start<F>(period: Duration, task: F) -> Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(0);

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let ticker = tick(period);
                loop {
                    select! {
                        recv(ticker) -> _ => task(),
                        recv(stop_rx) -> _ => break,
                    }
                }
            })
            .map_err(LoggerError::SchedulerStart)?;

        Ok(Self {
            period,
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Cancel future firings and wait for a running one to return.
    pub fn stop(&mut self) {
        drop(self.stop.take());

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.join() {
                eprintln!("[LOGGER ERROR] Flush scheduler thread panicked: {:?}", e);
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for FlushScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
