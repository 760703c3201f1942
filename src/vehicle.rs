// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level vehicle session abstraction.
//!
//! A [`Vehicle`] owns the state snapshot for one vehicle, the callback
//! registry notifying observers of changes, and the API client used to
//! refresh the snapshot. It is constructed at session start and dropped at
//! session end; there is no global state.
//!
//! ```no_run
//! use carlink_lib::protocol::ApiConfig;
//! use carlink_lib::types::VehicleId;
//! use carlink_lib::Vehicle;
//!
//! # async fn example() -> carlink_lib::Result<()> {
//! let config = ApiConfig::new("api.spicyglass.example")
//!     .with_https()
//!     .with_token("session-token");
//! let vehicle = Vehicle::new(config, VehicleId::new("V-1")?)?;
//!
//! // A screen subscribes to the categories it displays
//! let sub = vehicle.on_locks_changed(|locks| {
//!     println!("Locks changed: {locks:?}");
//! });
//!
//! // Pull the latest state from the API; observers fire per changed category
//! vehicle.refresh().await?;
//!
//! // The screen goes away
//! vehicle.unsubscribe(sub);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::protocol::{ApiClient, ApiConfig};
use crate::state::{DefrostState, LockState, SeatHeaterState, StateChange, VehicleState};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::telemetry::StateReport;
use crate::types::VehicleId;

/// A vehicle session tracking remote state.
///
/// The session holds the current [`VehicleState`] snapshot and notifies
/// registered observers per category whenever a value actually changes.
/// Updates arrive either from local callers (e.g. a command the app just
/// issued) via the `update_*` methods, or from the vehicle API via
/// [`Vehicle::refresh`].
///
/// `Vehicle` is cheap to share: the snapshot and registry live behind
/// `Arc`s, so clones observe and mutate the same session.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    client: ApiClient,
    state: Arc<RwLock<VehicleState>>,
    callbacks: Arc<CallbackRegistry>,
}

impl Vehicle {
    /// Creates a new session for the given vehicle.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created from the config.
    pub fn new(config: ApiConfig, id: VehicleId) -> Result<Self> {
        let client = config.into_client()?;
        Ok(Self::with_client(client, id))
    }

    /// Creates a new session using an already-built API client.
    #[must_use]
    pub fn with_client(client: ApiClient, id: VehicleId) -> Self {
        Self {
            id,
            client,
            state: Arc::new(RwLock::new(VehicleState::new())),
            callbacks: Arc::new(CallbackRegistry::new()),
        }
    }

    /// Returns the vehicle id this session tracks.
    #[must_use]
    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    /// Returns a snapshot of the current vehicle state.
    #[must_use]
    pub fn state(&self) -> VehicleState {
        self.state.read().clone()
    }

    /// Returns whether the ignition is on.
    #[must_use]
    pub fn ignition(&self) -> bool {
        self.state.read().ignition()
    }

    /// Returns the current door lock state.
    #[must_use]
    pub fn locks(&self) -> LockState {
        self.state.read().locks()
    }

    /// Returns the current seat heater state.
    #[must_use]
    pub fn seat_heaters(&self) -> SeatHeaterState {
        self.state.read().seat_heaters()
    }

    /// Returns the current defrost state.
    #[must_use]
    pub fn defrost(&self) -> DefrostState {
        self.state.read().defrost()
    }

    // ========== Local Updates ==========

    /// Updates the stored lock state.
    ///
    /// If any door differs from the stored state, the complete group is
    /// replaced and lock observers are notified with the new values.
    /// Nothing happens when all four values are unchanged.
    pub fn update_locks(&self, locks: LockState) {
        self.apply_and_notify(StateChange::Locks(locks));
    }

    /// Updates the stored seat heater state.
    ///
    /// Same contract as [`Vehicle::update_locks`], seat heating category.
    pub fn update_seat_heaters(&self, heaters: SeatHeaterState) {
        self.apply_and_notify(StateChange::SeatHeaters(heaters));
    }

    /// Updates the stored defrost state.
    ///
    /// Same contract as [`Vehicle::update_locks`], defrost category.
    pub fn update_defrost(&self, defrost: DefrostState) {
        self.apply_and_notify(StateChange::Defrost(defrost));
    }

    /// Updates the stored ignition value.
    ///
    /// Same contract as [`Vehicle::update_locks`], power category.
    pub fn update_ignition(&self, on: bool) {
        self.apply_and_notify(StateChange::Ignition(on));
    }

    /// Applies a change under the write lock, then dispatches outside it.
    ///
    /// Dispatching after the lock is released lets callbacks read the
    /// snapshot without deadlocking.
    fn apply_and_notify(&self, change: StateChange) {
        let changed = self.state.write().apply(&change);
        if changed {
            self.callbacks.dispatch(&change);
        }
    }

    // ========== Remote Refresh ==========

    /// Fetches the current state from the vehicle API and applies it.
    ///
    /// The decoded report is applied per category; observers are notified
    /// only for categories whose values actually changed. On success the
    /// snapshot's `last_updated` timestamp is set.
    ///
    /// A report missing any expected group fails the whole refresh with a
    /// parse error and leaves the snapshot untouched.
    ///
    /// # Errors
    ///
    /// Returns a protocol error if the fetch fails (including non-success
    /// HTTP statuses) and a parse error if the payload is malformed. Both
    /// are also logged at error level.
    pub async fn refresh(&self) -> Result<()> {
        let payload = self
            .client
            .vehicle_state(&self.id)
            .await
            .map_err(|err| {
                tracing::error!(vehicle = %self.id, error = %err, "Failed to fetch vehicle state");
                Error::Protocol(err)
            })?;

        let report = StateReport::from_value(payload).map_err(|err| {
            tracing::error!(vehicle = %self.id, error = %err, "Malformed vehicle state report");
            Error::Parse(err)
        })?;

        let mut applied = Vec::new();
        {
            let mut state = self.state.write();
            for change in report.to_state_changes() {
                if state.apply(&change) {
                    applied.push(change);
                }
            }
            state.mark_refreshed(Utc::now());
        }

        for change in &applied {
            self.callbacks.dispatch(change);
        }

        Ok(())
    }

    // ========== Subscriptions ==========

    /// Subscribes to ignition changes.
    pub fn on_ignition_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks.on_ignition_changed(callback)
    }

    /// Subscribes to door lock changes.
    ///
    /// The callback receives the complete new lock state, not just the
    /// doors that changed.
    pub fn on_locks_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(LockState) + Send + Sync + 'static,
    {
        self.callbacks.on_locks_changed(callback)
    }

    /// Subscribes to seat heater changes.
    pub fn on_seat_heaters_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(SeatHeaterState) + Send + Sync + 'static,
    {
        self.callbacks.on_seat_heaters_changed(callback)
    }

    /// Subscribes to defrost changes.
    pub fn on_defrost_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(DefrostState) + Send + Sync + 'static,
    {
        self.callbacks.on_defrost_changed(callback)
    }

    /// Subscribes to all state changes.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }

    /// Removes all registered callbacks.
    pub fn clear_subscriptions(&self) {
        self.callbacks.clear();
    }
}
