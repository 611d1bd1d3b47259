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

use std::fmt::{self, Debug};
use std::sync::Arc;
use std::time::Duration;

use acton_ern::Ern;
use tracing::{debug, instrument, trace};

use crate::agent::{CounterHandle, CounterState};
use crate::common::{AfterStopHook, CounterConfig, ErrorReporter};
use crate::message::CounterError;
use crate::traits::DisplaySink;

/// A counter agent that has been configured but not started.
///
/// Once [`start`](Self::start)ed, the agent's task repeats, until a stop is requested:
///
/// 1. snapshot the value,
/// 2. present the snapshot on the [`DisplaySink`] and wait for the acknowledgement,
/// 3. exit if a stop was requested meanwhile,
/// 4. apply the pending direction,
/// 5. sleep for the tick interval, cut short by a stop or an interrupt.
///
/// The value is never advanced past the snapshot the display is still working on,
/// and the agent never touches the presentation surface itself.
pub struct CounterAgent {
    id: Ern,
    state: CounterState,
    tick_interval: Duration,
    display: Arc<dyn DisplaySink>,
    reporter: ErrorReporter,
    after_stop: Option<AfterStopHook>,
}

impl Debug for CounterAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterAgent")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("tick_interval", &self.tick_interval)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

impl CounterAgent {
    /// Builds an idle agent from `config` that will present on `display`.
    ///
    /// # Errors
    ///
    /// Fails if `config.defaults.counter_name` is not a valid id root.
    pub fn new(config: &CounterConfig, display: Arc<dyn DisplaySink>) -> anyhow::Result<Self> {
        Ok(Self {
            id: Ern::with_root(config.defaults.counter_name.as_str())?,
            state: CounterState::new(
                config.defaults.initial_value,
                config.defaults.initial_direction,
            ),
            tick_interval: config.tick_interval(),
            display,
            reporter: ErrorReporter::log_only(),
            after_stop: None,
        })
    }

    /// Replaces the initial value and direction.
    #[must_use]
    pub fn with_initial_state(mut self, state: CounterState) -> Self {
        self.state = state;
        self
    }

    /// Replaces the pause between iterations.
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Routes non-fatal errors to `reporter` instead of only logging them.
    #[must_use]
    pub fn with_reporter(mut self, reporter: ErrorReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Registers a hook that receives the final state once the loop has exited.
    #[must_use]
    pub fn after_stop<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&CounterState) + Send + Sync + 'static,
    {
        self.after_stop = Some(Box::new(hook));
        self
    }

    /// The agent's id.
    #[must_use]
    pub const fn id(&self) -> &Ern {
        &self.id
    }

    /// Spawns the agent's loop and returns the handle that controls it.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self), fields(agent = %self.id))]
    pub fn start(self) -> CounterHandle {
        let handle = CounterHandle::new(self.id.clone(), self.state.direction());
        let tracker = handle.tracker().clone();
        tracker.spawn(self.wake(handle.clone()));
        tracker.close();
        debug!("Counter agent started");
        handle
    }

    async fn wake(mut self, handle: CounterHandle) {
        trace!(agent = %self.id, value = self.state.value(), "Counter loop running");
        while !handle.cancellation_token.is_cancelled() {
            let snapshot = self.state.snapshot();
            if let Err(error) = self.display.present(snapshot).await {
                // A snapshot that never reached the display is not advanced past.
                self.reporter.report(error);
                self.suspend(&handle).await;
                continue;
            }

            if handle.cancellation_token.is_cancelled() {
                break;
            }

            self.state.set_direction(handle.direction.load());
            let value = self.state.apply();
            trace!(agent = %self.id, value, "Applied {:?}", self.state.direction());

            self.suspend(&handle).await;
        }

        debug!(agent = %self.id, value = self.state.value(), "Counter loop exited");
        if let Some(hook) = self.after_stop.take() {
            hook(&self.state);
        }
    }

    async fn suspend(&self, handle: &CounterHandle) {
        tokio::select! {
            biased;
            () = handle.cancellation_token.cancelled() => {
                trace!(agent = %self.id, "Sleep cut short by stop request");
            }
            () = handle.interrupt.notified() => {
                self.reporter.report(CounterError::SuspendInterrupted {
                    agent: self.id.to_string(),
                });
            }
            () = tokio::time::sleep(self.tick_interval) => {}
        }
    }
}
