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
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace};

use crate::agent::{Direction, DirectionFlag};
use crate::traits::CounterControl;

/// Lifecycle of a counter agent. There is no way back from [`AgentState::Stopped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentState {
    /// The loop is presenting and counting.
    Running,
    /// A stop was requested but the loop has not noticed yet.
    Stopping,
    /// The loop has exited.
    Stopped,
}

/// A clonable handle for controlling a running [`CounterAgent`](crate::agent::CounterAgent).
///
/// The handle only carries the flags the agent reads (direction, stop, interrupt)
/// and the tracker of its task; the counter value itself never leaves the agent.
/// It is safe to use from any thread.
#[derive(Debug, Clone)]
pub struct CounterHandle {
    pub(crate) id: Ern,
    pub(crate) direction: Arc<DirectionFlag>,
    pub(crate) cancellation_token: CancellationToken,
    pub(crate) interrupt: Arc<Notify>,
    tracker: TaskTracker,
}

impl CounterHandle {
    pub(crate) fn new(id: Ern, direction: Direction) -> Self {
        Self {
            id,
            direction: Arc::new(DirectionFlag::new(direction)),
            cancellation_token: CancellationToken::new(),
            interrupt: Arc::new(Notify::new()),
            tracker: TaskTracker::new(),
        }
    }

    pub(crate) fn tracker(&self) -> &TaskTracker {
        &self.tracker
    }

    /// Returns a clone of the agent's id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Ern {
        self.id.clone()
    }

    /// Returns the direction the agent will apply on its next iteration.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction.load()
    }

    /// Reports where the agent is in its lifecycle.
    #[must_use]
    pub fn state(&self) -> AgentState {
        if self.tracker.is_closed() && self.tracker.is_empty() {
            AgentState::Stopped
        } else if self.cancellation_token.is_cancelled() {
            AgentState::Stopping
        } else {
            AgentState::Running
        }
    }

    /// Waits until the agent loop has exited.
    pub async fn stopped(&self) {
        self.tracker.wait().await;
    }

    /// Requests a stop and waits for the agent loop to exit.
    #[instrument(skip(self), fields(agent = %self.id))]
    pub async fn stop(&self) {
        self.request_stop();
        self.tracker.wait().await;
        trace!("Counter agent stopped");
    }

    /// Cuts the agent's current (or next) sleep short.
    ///
    /// The agent reports a [`CounterError::SuspendInterrupted`](crate::message::CounterError::SuspendInterrupted),
    /// re-checks the stop flag and keeps running. Interrupts do not queue up: any
    /// number of calls between two sleeps wake at most one of them.
    pub fn interrupt(&self) {
        self.interrupt.notify_one();
    }
}

impl CounterControl for CounterHandle {
    fn request_stop(&self) {
        if !self.cancellation_token.is_cancelled() {
            trace!(agent = %self.id, "Stop requested");
        }
        self.cancellation_token.cancel();
    }

    fn request_increment(&self) {
        self.direction.store(Direction::Increment);
    }

    fn request_decrement(&self) {
        self.direction.store(Direction::Decrement);
    }

    fn is_stop_requested(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }
}
