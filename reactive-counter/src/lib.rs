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

#![forbid(unsafe_code)]
#![forbid(missing_docs)]

//! # Reactive Counter
//!
//! A counter agent that presents its value through a single-owner display actor at a
//! fixed cadence, with direction and stop signals that any thread may set and a
//! one-shot agent that stops everything after a delay. Built on Tokio.
//!
//! ## Key Concepts
//!
//! - **Agents (`CounterAgent`, `AutoStopAgent`)**: Independently scheduled tasks,
//!   configured idle and started into clonable handles.
//! - **Handles (`CounterHandle`, `AutoStopHandle`, `DisplayHandle`)**: The only way
//!   to reach a running agent; they carry flags and trackers, never the agent's state.
//! - **Display (`DisplayActor`)**: Owns the `PresentationSurface`, applies updates in
//!   order and acknowledges each one, standing in for a UI toolkit's event thread.
//! - **Errors (`CounterError`, `ErrorReporter`)**: Failures are reported, never fatal.
//! - **Composition (`Controller`)**: Wires the three buttons (stop, up, down) to the agent.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reactive_counter::prelude::*;
//!
//! struct Label;
//!
//! impl PresentationSurface for Label {
//!     fn render(&mut self, text: &str) -> anyhow::Result<()> {
//!         println!("{text}");
//!         Ok(())
//!     }
//!
//!     fn disable_controls(&mut self) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let controller = Controller::launch(&CounterConfig::default(), Label)?;
//! controller.on_up_clicked();
//! ```

/// The counter and auto-stop agents and the counter's state.
pub mod agent;

/// Configuration, error reporting and the composition root.
pub mod common;

/// The display actor and its handle.
pub mod display;

/// Commands, display snapshots and errors.
pub mod message;

/// Seams between the core and its collaborators.
pub mod traits;

/// A prelude module for conveniently importing the most commonly used items.
pub mod prelude {
    // External crate re-exports
    pub use acton_ern::Ern;
    pub use async_trait::async_trait;

    // Core types
    pub use crate::agent::{
        AgentState, AutoStopAgent, AutoStopHandle, CounterAgent, CounterHandle, CounterState,
        Direction,
    };
    pub use crate::common::{Controller, CounterConfig, ErrorReporter};
    pub use crate::display::{DisplayActor, DisplayHandle};
    pub use crate::message::{Command, CounterError, DisplayValue};
    pub use crate::traits::{CounterControl, DisplaySink, PresentationSurface};
}
