// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `CarLink` Lib - A Rust library to track remote vehicle state.
//!
//! This library maintains a snapshot of a vehicle's remotely reported state
//! (ignition, door locks, seat heaters, defrost) for a client application,
//! refreshes it from a connected-car HTTP API, and notifies registered
//! observers per category whenever a value actually changes.
//!
//! # Core Pieces
//!
//! - **Vehicle session**: [`Vehicle`] owns the snapshot, the API client and
//!   the observer registry for one vehicle
//! - **Change detection**: updates replace whole per-category groups and
//!   notify only when something actually changed
//! - **Subscriptions**: multiple observers per category, removable via
//!   [`SubscriptionId`]
//! - **Typed decoding**: malformed or incomplete API payloads surface as
//!   distinguishable [`ParseError`]s, never panics
//!
//! # Quick Start
//!
//! ```no_run
//! use carlink_lib::protocol::ApiConfig;
//! use carlink_lib::types::VehicleId;
//! use carlink_lib::Vehicle;
//!
//! #[tokio::main]
//! async fn main() -> carlink_lib::Result<()> {
//!     let config = ApiConfig::new("api.spicyglass.example")
//!         .with_https()
//!         .with_token("session-token");
//!     let vehicle = Vehicle::new(config, VehicleId::new("V-1")?)?;
//!
//!     // Subscribe to lock changes; the callback receives the complete
//!     // new group, not just the doors that changed
//!     vehicle.on_locks_changed(|locks| {
//!         println!("all locked: {}", locks.all_locked());
//!     });
//!
//!     // Pull the latest state from the API
//!     vehicle.refresh().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Local Updates
//!
//! When the app already knows a new value (e.g. it just issued a lock
//! command), it can update the snapshot directly. Observers fire only if
//! the value actually changed:
//!
//! ```no_run
//! use carlink_lib::state::LockState;
//! # use carlink_lib::protocol::ApiConfig;
//! # use carlink_lib::types::VehicleId;
//! # use carlink_lib::Vehicle;
//! # fn example() -> carlink_lib::Result<()> {
//! # let vehicle = Vehicle::new(ApiConfig::new("h"), VehicleId::new("V-1")?)?;
//! vehicle.update_locks(LockState::all(true));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod protocol;
pub mod state;
pub mod subscription;
pub mod telemetry;
pub mod types;
mod vehicle;

pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{ApiClient, ApiConfig};
pub use state::{DefrostState, LockState, SeatHeaterState, StateChange, VehicleState};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use telemetry::StateReport;
pub use types::{AuthToken, Corner, VehicleId, Zone};
pub use vehicle::Vehicle;
