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

/// The toolkit-facing end of the display: a label to write text into and a set of
/// controls that can be switched off.
///
/// A surface is owned by exactly one display actor and is only ever touched from
/// that actor's execution context, so implementations need no locking of their own.
/// Surfaces bound to a particular OS thread can be built on the actor's thread with
/// [`DisplayActor::spawn_on_thread`](crate::display::DisplayActor::spawn_on_thread).
pub trait PresentationSurface {
    /// Replaces the displayed text.
    ///
    /// # Errors
    ///
    /// Any error is reported back to the presenter as a failed delivery.
    fn render(&mut self, text: &str) -> anyhow::Result<()>;

    /// Disables the stop, up and down controls.
    ///
    /// # Errors
    ///
    /// Errors are logged by the display actor; nobody is waiting on this call.
    fn disable_controls(&mut self) -> anyhow::Result<()>;
}
