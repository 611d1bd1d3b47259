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

//! Message types exchanged between the presentation layer, the agents and the display actor.
//!
//! *   [`Command`]: The three intents the presentation layer forwards (stop, up, down).
//! *   [`DisplayValue`]: The immutable snapshot handed to the display each iteration.
//! *   [`CounterError`]: The non-fatal failures agents report instead of crashing.
//! *   [`DisplayRequest`]: The display actor's mailbox protocol (crate-internal).

pub use command::Command;
pub use counter_error::CounterError;
pub use display_request::DisplayValue;
pub(crate) use display_request::DisplayRequest;

mod command;
mod counter_error;
mod display_request;
