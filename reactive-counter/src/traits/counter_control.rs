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

/// Cross-thread controls of a counter agent.
///
/// Every method only flips a flag and returns; none of them waits for the agent
/// loop to notice. Implementations must make the write visible to the agent
/// without further synchronization (atomics with acquire/release ordering or an
/// equivalent), because callers are typically input callbacks on other threads.
pub trait CounterControl: Send + Sync {
    /// Requests that the agent stop. Idempotent.
    fn request_stop(&self);

    /// Switches the agent into increment mode. The most recent call wins.
    fn request_increment(&self);

    /// Switches the agent into decrement mode. The most recent call wins.
    fn request_decrement(&self);

    /// Returns `true` once a stop has been requested.
    fn is_stop_requested(&self) -> bool;
}
