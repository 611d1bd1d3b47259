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

use std::fmt;

use tokio::sync::oneshot;

/// An immutable snapshot of the counter value, produced fresh each iteration.
///
/// Once handed to the display the snapshot shares nothing with the agent's
/// [`CounterState`](crate::agent::CounterState), so later mutations can never
/// leak into a render that is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayValue(i64);

impl DisplayValue {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped counter value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requests accepted by the display actor's mailbox, applied strictly in arrival order.
#[derive(Debug)]
pub(crate) enum DisplayRequest {
    /// Render `value`, then report the outcome on `ack`.
    Present {
        value: DisplayValue,
        ack: oneshot::Sender<anyhow::Result<()>>,
    },
    /// Disable every control on the presentation surface. Nobody waits for this one.
    DisableControls,
}
