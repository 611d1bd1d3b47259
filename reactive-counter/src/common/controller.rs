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

use std::sync::Arc;

use acton_ern::Ern;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, trace};

use crate::agent::{AutoStopAgent, AutoStopHandle, CounterAgent, CounterHandle};
use crate::common::config::CONFIG;
use crate::common::{CounterConfig, ErrorReporter};
use crate::display::{DisplayActor, DisplayHandle};
use crate::message::{Command, CounterError};
use crate::traits::{CounterControl, DisplaySink, PresentationSurface};

/// Composition root of the counter demo.
///
/// Launching a controller starts the display actor, the counter agent and (unless
/// disabled in configuration) the auto-stop agent. Afterwards the presentation
/// layer only forwards its three buttons through [`Controller::handle`] or the
/// `on_*_clicked` shorthands. The controller holds no counter logic of its own.
#[derive(Debug)]
pub struct Controller {
    counter: CounterHandle,
    auto_stop: Option<AutoStopHandle>,
    display: DisplayHandle,
    errors: Option<mpsc::Receiver<CounterError>>,
    config: CounterConfig,
}

impl Controller {
    /// Launches the demo against `surface` using the global [`CONFIG`].
    ///
    /// # Errors
    ///
    /// See [`Controller::launch`].
    pub fn launch_default<S>(surface: S) -> anyhow::Result<Self>
    where
        S: PresentationSurface + Send + 'static,
    {
        Self::launch(&CONFIG, surface)
    }

    /// Spawns a display actor owning `surface` and launches the demo against it.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Fails if one of the configured agent names is not a valid id root.
    pub fn launch<S>(config: &CounterConfig, surface: S) -> anyhow::Result<Self>
    where
        S: PresentationSurface + Send + 'static,
    {
        let display = DisplayActor::spawn(
            Ern::with_root(config.defaults.display_name.as_str())?,
            config.limits.display_inbox_capacity,
            surface,
        );
        Self::launch_with_display(config, display)
    }

    /// Launches both agents against an already running display.
    ///
    /// # Errors
    ///
    /// Fails if one of the configured agent names is not a valid id root.
    #[instrument(skip_all, fields(display = %display.id()))]
    pub fn launch_with_display(
        config: &CounterConfig,
        display: DisplayHandle,
    ) -> anyhow::Result<Self> {
        let (reporter, errors) = ErrorReporter::channel(config.limits.error_channel_capacity);
        let sink: Arc<dyn DisplaySink> = Arc::new(display.clone());

        let counter = CounterAgent::new(config, sink.clone())?
            .with_reporter(reporter.clone())
            .start();

        let auto_stop = if config.behavior.enable_auto_stop {
            Some(
                AutoStopAgent::new(config, counter.clone(), sink)?
                    .with_reporter(reporter)
                    .start(),
            )
        } else {
            debug!("Auto-stop disabled by configuration");
            None
        };

        info!(counter = %counter.id(), "Counter demo launched");
        Ok(Self {
            counter,
            auto_stop,
            display,
            errors: Some(errors),
            config: config.clone(),
        })
    }

    /// Routes `command` to the counter agent.
    ///
    /// Returns `false`, without touching the agent, once the display has disabled
    /// its controls.
    #[instrument(skip(self))]
    pub fn handle(&self, command: Command) -> bool {
        if !self.display.controls_enabled() {
            debug!("Controls disabled, ignoring command");
            return false;
        }
        match command {
            Command::Stop => self.counter.request_stop(),
            Command::Up => self.counter.request_increment(),
            Command::Down => self.counter.request_decrement(),
        }
        true
    }

    /// The stop button was clicked.
    pub fn on_stop_clicked(&self) -> bool {
        self.handle(Command::Stop)
    }

    /// The up button was clicked.
    pub fn on_up_clicked(&self) -> bool {
        self.handle(Command::Up)
    }

    /// The down button was clicked.
    pub fn on_down_clicked(&self) -> bool {
        self.handle(Command::Down)
    }

    /// The counter agent's handle.
    #[must_use]
    pub const fn counter(&self) -> &CounterHandle {
        &self.counter
    }

    /// The auto-stop agent's handle, if auto-stop is enabled.
    #[must_use]
    pub const fn auto_stop(&self) -> Option<&AutoStopHandle> {
        self.auto_stop.as_ref()
    }

    /// The display's handle.
    #[must_use]
    pub const fn display(&self) -> &DisplayHandle {
        &self.display
    }

    /// Takes the receiving end of the error-reporting channel. Only the first call returns it.
    pub fn take_errors(&mut self) -> Option<mpsc::Receiver<CounterError>> {
        self.errors.take()
    }

    /// Stops both agents and waits for them and the display actor to finish.
    ///
    /// # Errors
    ///
    /// Fails if shutdown takes longer than the configured shutdown timeout, which
    /// happens when a clone of the display handle is still held elsewhere.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> anyhow::Result<()> {
        let timeout = self.config.shutdown_timeout();
        let Self {
            counter,
            auto_stop,
            display,
            ..
        } = self;

        tokio::time::timeout(timeout, async move {
            counter.stop().await;
            if let Some(auto_stop) = auto_stop {
                auto_stop.cancel();
                auto_stop.finished().await;
            }
            display.close().await;
        })
        .await
        .map_err(|_| anyhow::anyhow!("counter demo did not shut down within {timeout:?}"))?;

        trace!("Counter demo shut down");
        Ok(())
    }
}
