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

use std::fmt::Debug;

use async_trait::async_trait;

use crate::message::{CounterError, DisplayValue};

/// The single serialization point every presentation update passes through.
///
/// Implementations guarantee that updates are applied in submission order and
/// never interleave with one another.
#[async_trait]
pub trait DisplaySink: Debug + Send + Sync {
    /// Hands `value` to the display and waits until it has been rendered.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::RenderDeliveryFailed`] if the display rejected the
    /// value, has shut down, or dropped the request before acknowledging it.
    async fn present(&self, value: DisplayValue) -> Result<(), CounterError>;

    /// Queues a request to disable every control, without waiting for it to be applied.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::DisplayClosed`] if the display no longer accepts requests.
    async fn disable_controls(&self) -> Result<(), CounterError>;
}
