/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! One-shot agent that stops a counter after a fixed delay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use acton_ern::Ern;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, instrument, trace};

use crate::common::{CounterConfig, ErrorReporter};
use crate::message::CounterError;
use crate::traits::{CounterControl, DisplaySink};

/// A delayed stop that has been configured but not started.
///
/// After the delay it calls [`CounterControl::request_stop`] on its target and
/// then queues a "disable controls" update on the display without waiting for it.
/// If the sleep is interrupted the interruption is reported and the stop still
/// happens, just earlier.
#[derive(Debug)]
pub struct AutoStopAgent<C> {
    id: Ern,
    delay: Duration,
    target: C,
    display: Arc<dyn DisplaySink>,
    reporter: ErrorReporter,
}

/// Handle to a started [`AutoStopAgent`].
#[derive(Debug, Clone)]
pub struct AutoStopHandle {
    id: Ern,
    cancellation_token: CancellationToken,
    interrupt: Arc<Notify>,
    fired: Arc<AtomicBool>,
    tracker: TaskTracker,
}

impl<C: CounterControl + 'static> AutoStopAgent<C> {
    /// Builds an idle auto-stop agent that will stop `target` after `config`'s delay.
    ///
    /// # Errors
    ///
    /// Fails if `config.defaults.auto_stop_name` is not a valid id root.
    pub fn new(
        config: &CounterConfig,
        target: C,
        display: Arc<dyn DisplaySink>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            id: Ern::with_root(config.defaults.auto_stop_name.as_str())?,
            delay: config.auto_stop_after(),
            target,
            display,
            reporter: ErrorReporter::log_only(),
        })
    }

    /// Replaces the delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Routes non-fatal errors to `reporter` instead of only logging them.
    #[must_use]
    pub fn with_reporter(mut self, reporter: ErrorReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Spawns the timer and returns its handle.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self), fields(agent = %self.id, delay = ?self.delay))]
    pub fn start(self) -> AutoStopHandle {
        let handle = AutoStopHandle {
            id: self.id.clone(),
            cancellation_token: CancellationToken::new(),
            interrupt: Arc::new(Notify::new()),
            fired: Arc::new(AtomicBool::new(false)),
            tracker: TaskTracker::new(),
        };
        handle.tracker.spawn(self.wake(handle.clone()));
        handle.tracker.close();
        debug!("Auto-stop armed");
        handle
    }

    async fn wake(self, handle: AutoStopHandle) {
        tokio::select! {
            biased;
            () = handle.cancellation_token.cancelled() => {
                debug!(agent = %self.id, "Auto-stop cancelled before firing");
                return;
            }
            () = handle.interrupt.notified() => {
                self.reporter.report(CounterError::SuspendInterrupted {
                    agent: self.id.to_string(),
                });
            }
            () = tokio::time::sleep(self.delay) => {
                trace!(agent = %self.id, "Auto-stop delay elapsed");
            }
        }

        info!(agent = %self.id, "Stopping counter");
        self.target.request_stop();
        handle.fired.store(true, Ordering::Release);

        if let Err(error) = self.display.disable_controls().await {
            self.reporter.report(error);
        }
    }
}

impl AutoStopHandle {
    /// Returns a clone of the agent's id.
    #[must_use]
    pub fn id(&self) -> Ern {
        self.id.clone()
    }

    /// Wakes the timer early. The interruption is reported and the stop goes ahead.
    pub fn interrupt(&self) {
        self.interrupt.notify_one();
    }

    /// Disarms the timer. Has no effect once it has fired.
    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    /// Returns `true` once the stop has been issued.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Waits until the timer has either fired or been cancelled.
    pub async fn finished(&self) {
        self.tracker.wait().await;
    }
}
