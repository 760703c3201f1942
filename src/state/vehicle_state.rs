// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vehicle state snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefrostState, LockState, SeatHeaterState, StateChange};

/// Current known state of a vehicle.
///
/// This struct maintains the last value either explicitly set or retrieved
/// from the vehicle API. There is no historical record; applying a change
/// replaces the category's group in place.
///
/// The initial snapshot matches a parked vehicle: ignition off, all doors
/// locked, all heaters and defrost off.
///
/// # Examples
///
/// ```
/// use carlink_lib::state::{StateChange, VehicleState};
///
/// let mut state = VehicleState::new();
/// assert!(state.locks().all_locked());
///
/// state.apply(&StateChange::ignition_on());
/// assert!(state.ignition());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Ignition on/off.
    ignition: bool,
    /// Lock state of the four doors.
    locks: LockState,
    /// Seat heater state of the four seats.
    seat_heaters: SeatHeaterState,
    /// Front and rear defrost state.
    defrost: DefrostState,
    /// When the snapshot was last refreshed from the vehicle API.
    ///
    /// `None` until the first successful refresh; local updates do not
    /// touch this.
    last_updated: Option<DateTime<Utc>>,
}

impl VehicleState {
    /// Creates a new snapshot with the default parked-vehicle values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the ignition is on.
    #[must_use]
    pub fn ignition(&self) -> bool {
        self.ignition
    }

    /// Returns the current door lock state.
    #[must_use]
    pub fn locks(&self) -> LockState {
        self.locks
    }

    /// Returns the current seat heater state.
    #[must_use]
    pub fn seat_heaters(&self) -> SeatHeaterState {
        self.seat_heaters
    }

    /// Returns the current defrost state.
    #[must_use]
    pub fn defrost(&self) -> DefrostState {
        self.defrost
    }

    /// Returns when the snapshot was last refreshed from the vehicle API.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Records that a remote refresh applied at the given time.
    pub fn mark_refreshed(&mut self, at: DateTime<Utc>) {
        self.last_updated = Some(at);
    }

    /// Applies a state change and returns whether the state actually changed.
    ///
    /// A group change is applied whole: if any field in the incoming group
    /// differs from the stored one, the complete group is replaced. When the
    /// incoming values are identical the snapshot is left untouched.
    ///
    /// # Returns
    ///
    /// Returns `true` if the state was modified, `false` if it was already
    /// at the target value.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Ignition(on) => {
                if self.ignition == *on {
                    false
                } else {
                    self.ignition = *on;
                    true
                }
            }
            StateChange::Locks(locks) => {
                if self.locks == *locks {
                    false
                } else {
                    self.locks = *locks;
                    true
                }
            }
            StateChange::SeatHeaters(heaters) => {
                if self.seat_heaters == *heaters {
                    false
                } else {
                    self.seat_heaters = *heaters;
                    true
                }
            }
            StateChange::Defrost(defrost) => {
                if self.defrost == *defrost {
                    false
                } else {
                    self.defrost = *defrost;
                    true
                }
            }
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    if self.apply(c) {
                        any_changed = true;
                    }
                }
                any_changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_parked() {
        let state = VehicleState::new();
        assert!(!state.ignition());
        assert!(state.locks().all_locked());
        assert!(!state.seat_heaters().any_on());
        assert!(!state.defrost().any_on());
        assert!(state.last_updated().is_none());
    }

    #[test]
    fn apply_ignition_change() {
        let mut state = VehicleState::new();

        assert!(state.apply(&StateChange::ignition_on()));
        assert!(state.ignition());

        // Applying the same value returns false
        assert!(!state.apply(&StateChange::ignition_on()));
    }

    #[test]
    fn apply_lock_change_replaces_whole_group() {
        let mut state = VehicleState::new();

        let change = StateChange::locks(false, true, true, true);
        assert!(state.apply(&change));
        assert_eq!(state.locks(), LockState::new(false, true, true, true));

        // Identical group is a no-op
        assert!(!state.apply(&change));
    }

    #[test]
    fn apply_seat_heater_change() {
        let mut state = VehicleState::new();

        assert!(state.apply(&StateChange::seat_heaters(true, false, false, false)));
        assert!(state.seat_heaters().front_left);
        assert!(!state.apply(&StateChange::seat_heaters(true, false, false, false)));
    }

    #[test]
    fn apply_defrost_change() {
        let mut state = VehicleState::new();

        assert!(state.apply(&StateChange::defrost(true, true)));
        assert_eq!(state.defrost(), DefrostState::new(true, true));
    }

    #[test]
    fn apply_batch_changes() {
        let mut state = VehicleState::new();

        let changes = StateChange::batch(vec![
            StateChange::ignition_on(),
            StateChange::locks(false, false, false, false),
        ]);

        assert!(state.apply(&changes));
        assert!(state.ignition());
        assert!(!state.locks().all_locked());
    }

    #[test]
    fn batch_with_no_effective_change_returns_false() {
        let mut state = VehicleState::new();

        // All values match the defaults
        let changes = StateChange::batch(vec![
            StateChange::ignition_off(),
            StateChange::Locks(LockState::all(true)),
            StateChange::SeatHeaters(SeatHeaterState::default()),
            StateChange::defrost(false, false),
        ]);

        assert!(!state.apply(&changes));
    }

    #[test]
    fn mark_refreshed_sets_timestamp() {
        let mut state = VehicleState::new();
        let now = Utc::now();

        state.mark_refreshed(now);
        assert_eq!(state.last_updated(), Some(now));
    }

    #[test]
    fn local_apply_does_not_touch_timestamp() {
        let mut state = VehicleState::new();
        state.apply(&StateChange::ignition_on());
        assert!(state.last_updated().is_none());
    }
}
