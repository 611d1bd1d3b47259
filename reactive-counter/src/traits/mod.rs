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

//! Seams between the counter core and its collaborators.
//!
//! *   [`CounterControl`]: The stop/direction surface of a running counter agent.
//! *   [`DisplaySink`]: Where agents hand snapshots and wait for them to be rendered.
//! *   [`PresentationSurface`]: The toolkit-specific thing that actually draws.

pub use counter_control::CounterControl;
pub use display_sink::DisplaySink;
pub use presentation_surface::PresentationSurface;

mod counter_control;
mod display_sink;
mod presentation_surface;
