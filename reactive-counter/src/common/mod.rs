//! Configuration, error reporting and the composition root.
//!
//! # Key Re-exported Components:
//!
//! *   [`Controller`]: Starts the display actor and both agents, and routes commands.
//! *   [`CounterConfig`]: TOML configuration loaded from XDG-compliant locations.
//! *   [`ErrorReporter`]: Injected channel through which agents surface non-fatal errors.

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

// --- Public Re-exports ---
pub use config::CounterConfig;
pub use controller::Controller;
pub use error_reporter::ErrorReporter;
pub use types::*;

// --- Submodules ---

/// Defines common type aliases.
mod types;

/// Defines the configuration system.
pub mod config;
/// Defines the `Controller` composition root.
mod controller;
/// Defines the `ErrorReporter`.
mod error_reporter;
