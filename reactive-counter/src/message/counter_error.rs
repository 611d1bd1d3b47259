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

use crate::message::DisplayValue;

/// Failures surfaced by the counter core.
///
/// None of these are fatal to the agent that hits them: they are handed to the
/// injected [`ErrorReporter`](crate::common::ErrorReporter) and the agent carries on.
/// Deciding that one of them should end the program is left to whoever consumes
/// the reporting channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CounterError {
    /// The synchronous handoff of `value` to the display did not complete.
    #[error("failed to deliver {value} to the display: {reason}")]
    RenderDeliveryFailed {
        /// The snapshot that could not be presented.
        value: DisplayValue,
        /// Why the handoff failed.
        reason: String,
    },
    /// An agent's sleep was cut short by an interrupt rather than a stop request.
    #[error("{agent} was interrupted while suspended")]
    SuspendInterrupted {
        /// The id of the interrupted agent.
        agent: String,
    },
    /// The display actor has shut down and no longer accepts requests.
    #[error("the display is closed")]
    DisplayClosed,
}
