//! The two agents of the counter core and the state the counter agent owns.
//!
//! *   [`CounterState`] / [`Direction`]: Pure data and transition rules.
//! *   [`CounterAgent`]: The presenting and counting loop; started into a [`CounterHandle`].
//! *   [`AutoStopAgent`]: A one-shot delayed stop; started into an [`AutoStopHandle`].

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

pub use auto_stop::{AutoStopAgent, AutoStopHandle};
pub use counter_agent::CounterAgent;
pub use counter_handle::{AgentState, CounterHandle};
pub use counter_state::{CounterState, Direction, DirectionFlag};

mod auto_stop;
mod counter_agent;
mod counter_handle;
mod counter_state;
