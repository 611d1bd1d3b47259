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

//! The display actor: single owner of the presentation surface.
//!
//! Agents never draw. They send snapshots to a [`DisplayHandle`] and wait for the
//! [`DisplayActor`] behind it to acknowledge them, which makes the actor the only
//! execution context that ever touches presentational state.

pub use display_actor::DisplayActor;
pub use display_handle::DisplayHandle;

mod display_actor;
mod display_handle;
