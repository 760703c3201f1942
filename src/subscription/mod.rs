// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription support for vehicle state changes.
//!
//! Callbacks are registered per category (ignition, locks, seat heaters,
//! defrost) or for all changes at once. Registration returns a
//! [`SubscriptionId`] that can be used to remove the callback later;
//! multiple callbacks can be registered for the same category.

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
