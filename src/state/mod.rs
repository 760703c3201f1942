// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vehicle state management types.
//!
//! This module provides types for tracking and updating vehicle state.
//! The [`VehicleState`] struct maintains the current snapshot, while
//! [`StateChange`] represents individual per-category changes that can be
//! applied to it.
//!
//! # Examples
//!
//! ```
//! use carlink_lib::state::{StateChange, VehicleState};
//!
//! let mut state = VehicleState::new();
//!
//! // Apply a lock state change
//! let change = StateChange::locks(false, true, true, true);
//! state.apply(&change);
//!
//! assert!(!state.locks().front_left);
//! ```

mod groups;
mod state_change;
mod vehicle_state;

pub use groups::{DefrostState, LockState, SeatHeaterState};
pub use state_change::StateChange;
pub use vehicle_state::VehicleState;
