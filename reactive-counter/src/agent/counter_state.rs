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

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use crate::message::DisplayValue;

/// The pending per-iteration adjustment of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// Leave the value unchanged.
    #[default]
    Hold = 0,
    /// Add one per iteration.
    Increment = 1,
    /// Subtract one per iteration.
    Decrement = 2,
}

impl Direction {
    /// The amount one iteration adds to the value.
    #[must_use]
    pub const fn step(self) -> i64 {
        match self {
            Self::Hold => 0,
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }

    const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Increment,
            2 => Self::Decrement,
            _ => Self::Hold,
        }
    }
}

/// A [`Direction`] that other threads can overwrite while the agent reads it.
///
/// A single atomic cell makes increment and decrement mutually exclusive: the
/// last store wins and there is no state in which both are set.
#[derive(Debug, Default)]
pub struct DirectionFlag(AtomicU8);

impl DirectionFlag {
    /// Creates a flag holding `direction`.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self(AtomicU8::new(direction as u8))
    }

    /// Publishes `direction` to the agent.
    pub fn store(&self, direction: Direction) {
        self.0.store(direction as u8, Ordering::Release);
    }

    /// Reads the most recently published direction.
    #[must_use]
    pub fn load(&self) -> Direction {
        Direction::from_raw(self.0.load(Ordering::Acquire))
    }
}

/// The counter value and the direction it moves in.
///
/// Pure data: owned by the counter agent's task and only mutated from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CounterState {
    value: i64,
    direction: Direction,
}

impl CounterState {
    /// Creates a state starting at `value`, moving in `direction`.
    #[must_use]
    pub const fn new(value: i64, direction: Direction) -> Self {
        Self { value, direction }
    }

    /// The current value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The direction the next [`apply`](Self::apply) moves in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the direction to [`Direction::Increment`].
    pub fn increment_intent(&mut self) {
        self.direction = Direction::Increment;
    }

    /// Sets the direction to [`Direction::Decrement`].
    pub fn decrement_intent(&mut self) {
        self.direction = Direction::Decrement;
    }

    /// Overwrites the direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advances the value by one step in the current direction and returns it.
    ///
    /// The value wraps at the bounds of `i64`.
    pub fn apply(&mut self) -> i64 {
        self.value = self.value.wrapping_add(self.direction.step());
        self.value
    }

    /// Takes an immutable snapshot of the value for the display.
    #[must_use]
    pub const fn snapshot(&self) -> DisplayValue {
        DisplayValue::new(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_follows_direction() {
        let mut state = CounterState::default();
        assert_eq!(state.apply(), 0);

        state.increment_intent();
        state.apply();
        state.apply();
        assert_eq!(state.value(), 2);

        state.decrement_intent();
        assert_eq!(state.apply(), 1);
    }

    #[test]
    fn apply_wraps_at_bounds() {
        let mut state = CounterState::new(i64::MAX, Direction::Increment);
        assert_eq!(state.apply(), i64::MIN);

        state.decrement_intent();
        assert_eq!(state.apply(), i64::MAX);
    }

    #[test]
    fn latest_intent_wins() {
        let flag = DirectionFlag::default();
        assert_eq!(flag.load(), Direction::Hold);

        flag.store(Direction::Increment);
        flag.store(Direction::Decrement);
        assert_eq!(flag.load(), Direction::Decrement);

        flag.store(Direction::Increment);
        assert_eq!(flag.load(), Direction::Increment);
    }

    #[test]
    fn snapshot_does_not_track_later_mutation() {
        let mut state = CounterState::new(41, Direction::Increment);
        let snapshot = state.snapshot();
        state.apply();
        assert_eq!(snapshot.value(), 41);
        assert_eq!(state.value(), 42);
    }
}
