// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-category state groups.
//!
//! Change detection and observer notification happen at the granularity of
//! these groups: an update either replaces a whole group or leaves it
//! untouched, and observers always receive the complete new group.

use serde::{Deserialize, Serialize};

use crate::types::{Corner, Zone};

/// Lock state of the four doors.
///
/// Field names match the wire keys of the `carLock` object in the vehicle
/// API payload.
///
/// # Examples
///
/// ```
/// use carlink_lib::state::LockState;
/// use carlink_lib::types::Corner;
///
/// let mut locks = LockState::all(true);
/// locks.set(Corner::FrontLeft, false);
/// assert!(!locks.get(Corner::FrontLeft));
/// assert!(locks.get(Corner::RearRight));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockState {
    /// Front-left door locked.
    pub front_left: bool,
    /// Front-right door locked.
    pub front_right: bool,
    /// Rear-left door locked.
    pub rear_left: bool,
    /// Rear-right door locked.
    pub rear_right: bool,
}

impl LockState {
    /// Creates a lock state from the four corner values, in wire order.
    #[must_use]
    pub const fn new(
        front_left: bool,
        front_right: bool,
        rear_left: bool,
        rear_right: bool,
    ) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Creates a lock state with all four doors set to `locked`.
    #[must_use]
    pub const fn all(locked: bool) -> Self {
        Self::new(locked, locked, locked, locked)
    }

    /// Returns the value for a specific corner.
    #[must_use]
    pub const fn get(&self, corner: Corner) -> bool {
        match corner {
            Corner::FrontLeft => self.front_left,
            Corner::FrontRight => self.front_right,
            Corner::RearLeft => self.rear_left,
            Corner::RearRight => self.rear_right,
        }
    }

    /// Sets the value for a specific corner.
    pub const fn set(&mut self, corner: Corner, locked: bool) {
        match corner {
            Corner::FrontLeft => self.front_left = locked,
            Corner::FrontRight => self.front_right = locked,
            Corner::RearLeft => self.rear_left = locked,
            Corner::RearRight => self.rear_right = locked,
        }
    }

    /// Returns `true` if all four doors are locked.
    #[must_use]
    pub const fn all_locked(&self) -> bool {
        self.front_left && self.front_right && self.rear_left && self.rear_right
    }
}

impl Default for LockState {
    /// All doors locked, matching the initial snapshot.
    fn default() -> Self {
        Self::all(true)
    }
}

/// Seat heater state for the four seats.
///
/// Same four-corner shape as [`LockState`]; matches the `seatHeater` object
/// in the vehicle API payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatHeaterState {
    /// Front-left seat heater on.
    pub front_left: bool,
    /// Front-right seat heater on.
    pub front_right: bool,
    /// Rear-left seat heater on.
    pub rear_left: bool,
    /// Rear-right seat heater on.
    pub rear_right: bool,
}

impl SeatHeaterState {
    /// Creates a seat heater state from the four corner values, in wire order.
    #[must_use]
    pub const fn new(
        front_left: bool,
        front_right: bool,
        rear_left: bool,
        rear_right: bool,
    ) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Creates a seat heater state with all four seats set to `on`.
    #[must_use]
    pub const fn all(on: bool) -> Self {
        Self::new(on, on, on, on)
    }

    /// Returns the value for a specific corner.
    #[must_use]
    pub const fn get(&self, corner: Corner) -> bool {
        match corner {
            Corner::FrontLeft => self.front_left,
            Corner::FrontRight => self.front_right,
            Corner::RearLeft => self.rear_left,
            Corner::RearRight => self.rear_right,
        }
    }

    /// Sets the value for a specific corner.
    pub const fn set(&mut self, corner: Corner, on: bool) {
        match corner {
            Corner::FrontLeft => self.front_left = on,
            Corner::FrontRight => self.front_right = on,
            Corner::RearLeft => self.rear_left = on,
            Corner::RearRight => self.rear_right = on,
        }
    }

    /// Returns `true` if any seat heater is on.
    #[must_use]
    pub const fn any_on(&self) -> bool {
        self.front_left || self.front_right || self.rear_left || self.rear_right
    }
}

/// Defrost state for the two windshields.
///
/// Matches the `defrost` object in the vehicle API payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefrostState {
    /// Front windshield defrost on.
    pub front: bool,
    /// Rear windshield defrost on.
    pub rear: bool,
}

impl DefrostState {
    /// Creates a defrost state from the front and rear values.
    #[must_use]
    pub const fn new(front: bool, rear: bool) -> Self {
        Self { front, rear }
    }

    /// Returns the value for a specific zone.
    #[must_use]
    pub const fn get(&self, zone: Zone) -> bool {
        match zone {
            Zone::Front => self.front,
            Zone::Rear => self.rear,
        }
    }

    /// Sets the value for a specific zone.
    pub const fn set(&mut self, zone: Zone, on: bool) {
        match zone {
            Zone::Front => self.front = on,
            Zone::Rear => self.rear = on,
        }
    }

    /// Returns `true` if either defrost is on.
    #[must_use]
    pub const fn any_on(&self) -> bool {
        self.front || self.rear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_state_defaults_to_all_locked() {
        let locks = LockState::default();
        assert!(locks.all_locked());
    }

    #[test]
    fn lock_state_corner_accessors() {
        let mut locks = LockState::all(true);
        locks.set(Corner::RearLeft, false);

        assert!(!locks.get(Corner::RearLeft));
        assert!(!locks.all_locked());
        for corner in [Corner::FrontLeft, Corner::FrontRight, Corner::RearRight] {
            assert!(locks.get(corner));
        }
    }

    #[test]
    fn seat_heater_defaults_to_all_off() {
        let heaters = SeatHeaterState::default();
        assert!(!heaters.any_on());
    }

    #[test]
    fn defrost_zone_accessors() {
        let mut defrost = DefrostState::default();
        assert!(!defrost.any_on());

        defrost.set(Zone::Rear, true);
        assert!(defrost.get(Zone::Rear));
        assert!(!defrost.get(Zone::Front));
    }

    #[test]
    fn lock_state_wire_keys() {
        let json = r#"{"frontLeft":false,"frontRight":true,"rearLeft":true,"rearRight":true}"#;
        let locks: LockState = serde_json::from_str(json).unwrap();
        assert_eq!(locks, LockState::new(false, true, true, true));
    }

    #[test]
    fn defrost_wire_keys() {
        let json = r#"{"front":true,"rear":false}"#;
        let defrost: DefrostState = serde_json::from_str(json).unwrap();
        assert_eq!(defrost, DefrostState::new(true, false));
    }

    #[test]
    fn lock_state_rejects_missing_corner() {
        let json = r#"{"frontLeft":false,"frontRight":true,"rearLeft":true}"#;
        assert!(serde_json::from_str::<LockState>(json).is_err());
    }
}
