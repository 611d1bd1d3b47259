/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     you may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::agent::Direction;

/// Configuration for the reactive counter.
///
/// Loaded from TOML in XDG-compliant directories. Every section falls back to its
/// defaults, so a file only needs the keys it wants to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Cadence and delay configuration
    pub timings: TimingsConfig,
    /// Channel capacity configuration
    pub limits: LimitsConfig,
    /// Initial values and agent names
    pub defaults: DefaultsConfig,
    /// Behavioral switches
    pub behavior: BehaviorConfig,
}

/// Cadence and delay values, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingsConfig {
    /// Pause between two iterations of the counter loop
    pub tick_interval_ms: u64,
    /// Delay before the auto-stop agent stops the counter
    pub auto_stop_after_ms: u64,
    /// Upper bound on a controller shutdown
    pub shutdown_timeout_ms: u64,
}

/// Channel capacities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Capacity of the display actor's mailbox
    pub display_inbox_capacity: usize,
    /// Capacity of the error-reporting channel handed out by the controller
    pub error_channel_capacity: usize,
}

/// Initial counter state and agent names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Value the counter starts from
    pub initial_value: i64,
    /// Direction the counter starts in
    pub initial_direction: Direction,
    /// Root name of the counter agent's id
    pub counter_name: String,
    /// Root name of the auto-stop agent's id
    pub auto_stop_name: String,
    /// Root name of the display actor's id
    pub display_name: String,
}

/// Behavioral switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Start the auto-stop agent alongside the counter
    pub enable_auto_stop: bool,
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            auto_stop_after_ms: 10_000,
            shutdown_timeout_ms: 5_000,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            display_inbox_capacity: 32,
            error_channel_capacity: 64,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            initial_direction: Direction::Hold,
            counter_name: "counter".to_string(),
            auto_stop_name: "auto_stop".to_string(),
            display_name: "display".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            enable_auto_stop: true,
        }
    }
}

impl CounterConfig {
    /// Convert the tick interval to a `Duration`
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.timings.tick_interval_ms)
    }

    /// Convert the auto-stop delay to a `Duration`
    #[must_use]
    pub const fn auto_stop_after(&self) -> Duration {
        Duration::from_millis(self.timings.auto_stop_after_ms)
    }

    /// Convert the shutdown timeout to a `Duration`
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.timings.shutdown_timeout_ms)
    }

    /// Load configuration from an explicit TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration TOML.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `reactive-counter/config.toml` under `$XDG_CONFIG_HOME` and then
    /// the XDG fallbacks (`~/.config` on Linux).
    ///
    /// If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and uses defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("reactive-counter") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            info!("Loading configuration from: {}", path.display());
            match Self::load_from(&path) {
                Ok(config) => config,
                Err(e) => {
                    error!("{:#}", e);
                    Self::default()
                }
            }
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: CounterConfig = CounterConfig::load();
}
