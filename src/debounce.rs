//! Trailing-edge debouncing of a changing value.
//!
//! A [`Debouncer`] accepts raw inputs through [`Debouncer::set`] and
//! publishes a value only after it has stayed unchanged for the configured
//! delay. Every new input restarts the timer. The settled value is read from
//! a `watch` channel and is `None` until the first input has settled.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

pub struct Debouncer<T> {
    delay: Duration,
    input: mpsc::UnboundedSender<T>,
    settled: watch::Receiver<Option<T>>,
    task: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Start a debouncer on the current tokio runtime.
    ///
    /// A zero delay still publishes from the background task, never from
    /// inside [`Debouncer::set`].
    pub fn new(delay: Duration) -> Self {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (settled_tx, settled) = watch::channel(None);
        let task = tokio::spawn(debounce_loop(input_rx, settled_tx, delay));
        Self {
            delay,
            input,
            settled,
            task,
        }
    }

    /// Feed a new input. Repeating the last input is a no-op.
    pub fn set(&self, value: T) {
        let _ = self.input.send(value);
    }

    /// The last settled value, if any input has settled yet.
    pub fn current(&self) -> Option<T> {
        self.settled.borrow().clone()
    }

    /// Receiver notified each time the settled value changes.
    ///
    /// The sender is dropped together with the debouncer, so `changed()`
    /// returns an error after teardown instead of waiting forever.
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.settled.clone()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn debounce_loop<T>(
    mut input: mpsc::UnboundedReceiver<T>,
    settled: watch::Sender<Option<T>>,
    delay: Duration,
) where
    T: Clone + PartialEq,
{
    let mut last_input: Option<T> = None;
    let mut deadline: Option<Instant> = None;

    loop {
        tokio::select! {
            biased;

            received = input.recv() => {
                let Some(value) = received else {
                    break;
                };
                if last_input.as_ref() == Some(&value) {
                    continue;
                }
                last_input = Some(value);
                deadline = Some(Instant::now() + delay);
            }

            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                let value = last_input.clone();
                // Settling on the value already published is not a change.
                settled.send_if_modified(|current| {
                    if *current == value {
                        false
                    } else {
                        *current = value;
                        true
                    }
                });
            }
        }
    }
}
