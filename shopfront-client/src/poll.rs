//! Repeating poll scheduler
//!
//! Wraps a controller in a background task that calls `poll_once` on a fixed
//! interval until cancelled. Tests never touch this; they drive `poll_once`
//! directly and stay off the wall clock.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Anything the poller can drive
#[async_trait]
pub trait Pollable: Send {
    async fn poll_once(&mut self);
}

/// Handle to a spawned polling loop
pub struct OrderPoller {
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl OrderPoller {
    /// Spawn the polling loop
    ///
    /// Ticks that land while a previous tick still holds the controller are
    /// dropped, not queued, so change handlers never overlap and a slow tick
    /// never builds a backlog.
    pub fn spawn<C>(
        controller: Arc<Mutex<C>>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> Self
    where
        C: Pollable + 'static,
    {
        let token = shutdown.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await; // skip immediate tick

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::debug!("order poller shutting down");
                        break;
                    }

                    _ = ticker.tick() => {
                        let Ok(mut controller) = controller.try_lock() else {
                            tracing::debug!("poll tick dropped, previous tick still running");
                            continue;
                        };
                        controller.poll_once().await;
                    }
                }
            }
        });

        Self { shutdown, handle }
    }

    /// Request shutdown; the loop exits before its next tick
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    /// Wait for the loop to finish
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}
