// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for vehicle state subscriptions.
//!
//! This module provides the core types for managing subscription callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Internal registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::{DefrostState, LockState, SeatHeaterState, StateChange};

/// Unique identifier for a subscription.
///
/// This ID is returned when registering a callback and can be used to
/// unsubscribe later. IDs are unique within a vehicle session's lifetime.
///
/// # Examples
///
/// ```ignore
/// let sub_id = vehicle.on_locks_changed(|locks| { /* ... */ });
///
/// // Later, unsubscribe
/// vehicle.unsubscribe(sub_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for ignition callbacks.
type IgnitionCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Type alias for door lock callbacks.
type LocksCallback = Arc<dyn Fn(LockState) + Send + Sync>;

/// Type alias for seat heater callbacks.
type SeatHeatersCallback = Arc<dyn Fn(SeatHeaterState) + Send + Sync>;

/// Type alias for defrost callbacks.
type DefrostCallback = Arc<dyn Fn(DefrostState) + Send + Sync>;

/// Type alias for generic state change callbacks.
type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;

/// Registry for managing vehicle subscription callbacks.
///
/// This is an internal type used by [`Vehicle`](crate::Vehicle) to store
/// and dispatch callbacks. It uses thread-safe interior mutability via
/// `parking_lot::RwLock`, so callbacks can be registered and dispatched
/// from any task.
///
/// Callbacks are wrapped in `Arc` so they can be cloned cheaply.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Ignition change callbacks.
    ignition_callbacks: RwLock<HashMap<SubscriptionId, IgnitionCallback>>,
    /// Door lock change callbacks.
    locks_callbacks: RwLock<HashMap<SubscriptionId, LocksCallback>>,
    /// Seat heater change callbacks.
    seat_heaters_callbacks: RwLock<HashMap<SubscriptionId, SeatHeatersCallback>>,
    /// Defrost change callbacks.
    defrost_callbacks: RwLock<HashMap<SubscriptionId, DefrostCallback>>,
    /// Generic state change callbacks (receive all changes).
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ignition_callbacks: RwLock::new(HashMap::new()),
            locks_callbacks: RwLock::new(HashMap::new()),
            seat_heaters_callbacks: RwLock::new(HashMap::new()),
            defrost_callbacks: RwLock::new(HashMap::new()),
            state_changed_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for ignition changes.
    ///
    /// The callback receives the new ignition value.
    pub fn on_ignition_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.ignition_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for door lock changes.
    ///
    /// The callback receives the complete new lock state, not just the
    /// doors that changed.
    pub fn on_locks_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(LockState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.locks_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for seat heater changes.
    pub fn on_seat_heaters_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(SeatHeaterState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.seat_heaters_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for defrost changes.
    pub fn on_defrost_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(DefrostState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.defrost_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for all state changes.
    ///
    /// This is useful for logging or debugging, as it receives every change.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        // Try each callback map until we find and remove the ID
        if self.ignition_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.locks_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.seat_heaters_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.defrost_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.state_changed_callbacks.write().remove(&id).is_some() {
            return true;
        }
        false
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.ignition_callbacks.write().clear();
        self.locks_callbacks.write().clear();
        self.seat_heaters_callbacks.write().clear();
        self.defrost_callbacks.write().clear();
        self.state_changed_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a state change to relevant callbacks.
    ///
    /// This method calls all registered callbacks that match the change
    /// category. Callbacks are called synchronously in an arbitrary order.
    pub fn dispatch(&self, change: &StateChange) {
        // Always dispatch to generic state_changed callbacks
        {
            let callbacks = self.state_changed_callbacks.read();
            for callback in callbacks.values() {
                callback(change);
            }
        }

        // Dispatch to specific callbacks based on change category
        match change {
            StateChange::Ignition(on) => {
                let callbacks = self.ignition_callbacks.read();
                for callback in callbacks.values() {
                    callback(*on);
                }
            }
            StateChange::Locks(locks) => {
                let callbacks = self.locks_callbacks.read();
                for callback in callbacks.values() {
                    callback(*locks);
                }
            }
            StateChange::SeatHeaters(heaters) => {
                let callbacks = self.seat_heaters_callbacks.read();
                for callback in callbacks.values() {
                    callback(*heaters);
                }
            }
            StateChange::Defrost(defrost) => {
                let callbacks = self.defrost_callbacks.read();
                for callback in callbacks.values() {
                    callback(*defrost);
                }
            }
            StateChange::Batch(changes) => {
                // Recursively dispatch each change in the batch
                for nested_change in changes {
                    self.dispatch(nested_change);
                }
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.ignition_callbacks.read().len()
            + self.locks_callbacks.read().len()
            + self.seat_heaters_callbacks.read().len()
            + self.defrost_callbacks.read().len()
            + self.state_changed_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
