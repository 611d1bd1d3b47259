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

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use acton_ern::Ern;
use tokio::sync::mpsc;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, instrument, trace, warn};

use crate::display::DisplayHandle;
use crate::message::DisplayRequest;
use crate::traits::PresentationSurface;

/// The single owner of a [`PresentationSurface`].
///
/// The actor drains its mailbox one request at a time, so renders are applied in
/// submission order and never overlap. Nothing else holds the surface; everyone
/// else talks to the actor through a [`DisplayHandle`].
///
/// The actor stops once every handle has been dropped.
#[derive(Debug)]
pub struct DisplayActor<S> {
    id: Ern,
    surface: S,
    inbox: mpsc::Receiver<DisplayRequest>,
    controls_enabled: Arc<AtomicBool>,
    presented: u64,
}

impl<S: PresentationSurface> DisplayActor<S> {
    fn handle(&mut self, request: DisplayRequest) {
        match request {
            DisplayRequest::Present { value, ack } => {
                let text = value.to_string();
                let result = self.surface.render(&text);
                match &result {
                    Ok(()) => {
                        self.presented += 1;
                        trace!(display = %self.id, %text, presented = self.presented, "Rendered");
                    }
                    Err(e) => warn!(display = %self.id, %text, "Surface rejected render: {:#}", e),
                }
                if ack.send(result).is_err() {
                    trace!(display = %self.id, %text, "Presenter stopped waiting for acknowledgement");
                }
            }
            DisplayRequest::DisableControls => match self.surface.disable_controls() {
                Ok(()) => {
                    self.controls_enabled.store(false, Ordering::Release);
                    debug!(display = %self.id, "Controls disabled");
                }
                Err(e) => error!(display = %self.id, "Failed to disable controls: {:#}", e),
            },
        }
    }

    async fn run(mut self) {
        while let Some(request) = self.inbox.recv().await {
            self.handle(request);
        }
        debug!(display = %self.id, presented = self.presented, "Display closed");
    }

    fn run_blocking(mut self) {
        while let Some(request) = self.inbox.blocking_recv() {
            self.handle(request);
        }
        debug!(display = %self.id, presented = self.presented, "Display closed");
    }
}

fn channel(id: Ern, capacity: usize) -> (DisplayHandle, mpsc::Receiver<DisplayRequest>) {
    let (outbox, inbox) = mpsc::channel(capacity.max(1));
    let handle = DisplayHandle {
        id,
        outbox,
        controls_enabled: Arc::new(AtomicBool::new(true)),
        tracker: TaskTracker::new(),
    };
    (handle, inbox)
}

impl<S: PresentationSurface + Send + 'static> DisplayActor<S> {
    /// Spawns the actor as a Tokio task owning `surface`.
    ///
    /// `capacity` bounds the number of queued requests.
    #[instrument(skip(surface))]
    pub fn spawn(id: Ern, capacity: usize, surface: S) -> DisplayHandle {
        let (handle, inbox) = channel(id.clone(), capacity);
        let actor = Self {
            id,
            surface,
            inbox,
            controls_enabled: handle.controls_enabled.clone(),
            presented: 0,
        };
        handle.tracker.spawn(actor.run());
        handle.tracker.close();
        handle
    }
}

impl<S: PresentationSurface + 'static> DisplayActor<S> {
    /// Runs the actor on a dedicated thread of the blocking pool.
    ///
    /// The surface is built by `factory` on that thread and never leaves it, which
    /// suits toolkits whose widgets must stay on the thread that created them.
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(factory))]
    pub fn spawn_on_thread<F>(id: Ern, capacity: usize, factory: F) -> DisplayHandle
    where
        F: FnOnce() -> S + Send + 'static,
    {
        let (handle, inbox) = channel(id.clone(), capacity);
        let controls_enabled = handle.controls_enabled.clone();
        let token = handle.tracker.token();
        handle.tracker.close();
        tokio::task::spawn_blocking(move || {
            let _token = token;
            let actor = Self {
                id,
                surface: factory(),
                inbox,
                controls_enabled,
                presented: 0,
            };
            actor.run_blocking();
        });
        handle
    }
}
