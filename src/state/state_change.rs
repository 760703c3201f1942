// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the building blocks for updating vehicle state. They
//! represent discrete per-category changes that can be applied to a
//! [`VehicleState`](super::VehicleState), either from local callers or from
//! a decoded remote state report.
//!
//! # Change Types
//!
//! - [`StateChange::Ignition`] - Ignition on/off
//! - [`StateChange::Locks`] - Door lock state for all four doors
//! - [`StateChange::SeatHeaters`] - Seat heater state for all four seats
//! - [`StateChange::Defrost`] - Front and rear defrost state
//! - [`StateChange::Batch`] - Multiple changes grouped together
//!
//! # Examples
//!
//! ```
//! use carlink_lib::state::{LockState, StateChange, VehicleState};
//!
//! let mut state = VehicleState::new();
//!
//! // Apply returns true if state actually changed
//! let changed = state.apply(&StateChange::ignition_on());
//! assert!(changed);
//!
//! // Applying the same change again returns false
//! let changed = state.apply(&StateChange::ignition_on());
//! assert!(!changed);
//! ```

use serde::{Deserialize, Serialize};

use super::{DefrostState, LockState, SeatHeaterState};

/// Represents a change in vehicle state.
///
/// Each variant carries the complete new value set for its category, so
/// observers never see a partial group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateChange {
    /// Ignition turned on or off.
    Ignition(bool),

    /// Door lock state changed.
    Locks(LockState),

    /// Seat heater state changed.
    SeatHeaters(SeatHeaterState),

    /// Defrost state changed.
    Defrost(DefrostState),

    /// Multiple changes at once.
    ///
    /// Used when a remote refresh returns values for several categories.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates an ignition change.
    #[must_use]
    pub fn ignition(on: bool) -> Self {
        Self::Ignition(on)
    }

    /// Creates an ignition-on change.
    #[must_use]
    pub fn ignition_on() -> Self {
        Self::Ignition(true)
    }

    /// Creates an ignition-off change.
    #[must_use]
    pub fn ignition_off() -> Self {
        Self::Ignition(false)
    }

    /// Creates a lock state change from the four corner values, in wire order.
    #[must_use]
    pub fn locks(front_left: bool, front_right: bool, rear_left: bool, rear_right: bool) -> Self {
        Self::Locks(LockState::new(front_left, front_right, rear_left, rear_right))
    }

    /// Creates a seat heater change from the four corner values, in wire order.
    #[must_use]
    pub fn seat_heaters(
        front_left: bool,
        front_right: bool,
        rear_left: bool,
        rear_right: bool,
    ) -> Self {
        Self::SeatHeaters(SeatHeaterState::new(
            front_left,
            front_right,
            rear_left,
            rear_right,
        ))
    }

    /// Creates a defrost change.
    #[must_use]
    pub fn defrost(front: bool, rear: bool) -> Self {
        Self::Defrost(DefrostState::new(front, rear))
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns `true` if this is an ignition change.
    #[must_use]
    pub fn is_ignition(&self) -> bool {
        matches!(self, Self::Ignition(_))
    }

    /// Returns `true` if this is a lock state change.
    #[must_use]
    pub fn is_locks(&self) -> bool {
        matches!(self, Self::Locks(_))
    }

    /// Returns `true` if this is a batch of changes.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Returns the number of individual changes.
    ///
    /// For batch changes, returns the total count of nested changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        match self {
            Self::Batch(changes) => changes.iter().map(Self::change_count).sum(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignition_constructors() {
        assert_eq!(StateChange::ignition_on(), StateChange::Ignition(true));
        assert_eq!(StateChange::ignition_off(), StateChange::Ignition(false));
    }

    #[test]
    fn locks_constructor_preserves_order() {
        let change = StateChange::locks(false, true, true, true);
        assert_eq!(
            change,
            StateChange::Locks(LockState::new(false, true, true, true))
        );
    }

    #[test]
    fn predicates() {
        assert!(StateChange::ignition_on().is_ignition());
        assert!(StateChange::locks(true, true, true, true).is_locks());
        assert!(!StateChange::defrost(false, false).is_locks());
    }

    #[test]
    fn change_count() {
        assert_eq!(StateChange::ignition_on().change_count(), 1);

        let batch = StateChange::batch(vec![
            StateChange::ignition_on(),
            StateChange::defrost(true, false),
        ]);
        assert_eq!(batch.change_count(), 2);

        // Nested batch
        let nested = StateChange::batch(vec![batch, StateChange::ignition_off()]);
        assert_eq!(nested.change_count(), 3);
    }
}
