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
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace};

use crate::message::{CounterError, DisplayRequest, DisplayValue};
use crate::traits::DisplaySink;

/// A clonable handle to a [`DisplayActor`](crate::display::DisplayActor)'s mailbox.
///
/// This is the [`DisplaySink`] the agents are given. Handles can be cloned and
/// shared freely; the actor keeps running until the last one is dropped.
#[derive(Debug, Clone)]
pub struct DisplayHandle {
    pub(crate) id: Ern,
    pub(crate) outbox: mpsc::Sender<DisplayRequest>,
    pub(crate) controls_enabled: Arc<AtomicBool>,
    pub(crate) tracker: TaskTracker,
}

impl DisplayHandle {
    /// Returns a clone of the display's id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Ern {
        self.id.clone()
    }

    /// Returns `false` once the surface has applied a "disable controls" request.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled.load(Ordering::Acquire)
    }

    /// Drops this handle and waits for the actor to finish.
    ///
    /// The actor only finishes once every other clone of the handle is gone too.
    #[instrument(skip(self), fields(display = %self.id))]
    pub async fn close(self) {
        let tracker = self.tracker.clone();
        drop(self);
        tracker.wait().await;
        trace!("Display actor finished");
    }
}

#[async_trait]
impl DisplaySink for DisplayHandle {
    async fn present(&self, value: DisplayValue) -> Result<(), CounterError> {
        let (ack, acknowledged) = oneshot::channel();
        self.outbox
            .send(DisplayRequest::Present { value, ack })
            .await
            .map_err(|_| CounterError::RenderDeliveryFailed {
                value,
                reason: "display mailbox is closed".to_string(),
            })?;

        match acknowledged.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(CounterError::RenderDeliveryFailed {
                value,
                reason: format!("{e:#}"),
            }),
            Err(_) => Err(CounterError::RenderDeliveryFailed {
                value,
                reason: "display dropped the request before acknowledging it".to_string(),
            }),
        }
    }

    async fn disable_controls(&self) -> Result<(), CounterError> {
        self.outbox
            .send(DisplayRequest::DisableControls)
            .await
            .map_err(|_| CounterError::DisplayClosed)
    }
}
