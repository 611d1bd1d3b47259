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

/// An intent forwarded by the presentation layer.
///
/// Commands may originate from any thread (typically an input callback) and are
/// routed to the counter agent by the [`Controller`](crate::common::Controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Ask the counter agent to stop. Repeating it is harmless.
    Stop,
    /// Switch the counter into increment mode.
    Up,
    /// Switch the counter into decrement mode.
    Down,
}
