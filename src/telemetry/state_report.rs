// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for vehicle state reports.

use serde::Deserialize;

use crate::error::ParseError;
use crate::state::{DefrostState, LockState, SeatHeaterState, StateChange};

/// Decoded vehicle state report from the API.
///
/// The wire payload is a JSON object, optionally wrapped in a top-level
/// `"states"` key:
///
/// ```json
/// {
///   "carOn": true,
///   "carLock": {"frontLeft": true, "frontRight": true, "rearLeft": true, "rearRight": true},
///   "seatHeater": {"frontLeft": false, "frontRight": false, "rearLeft": false, "rearRight": false},
///   "defrost": {"front": false, "rear": false}
/// }
/// ```
///
/// All four groups are required. A report missing any of them fails to
/// decode with [`ParseError::MissingField`]; no partial report is ever
/// produced.
///
/// # Examples
///
/// ```
/// use carlink_lib::telemetry::StateReport;
///
/// let json = r#"{
///     "carOn": true,
///     "carLock": {"frontLeft": true, "frontRight": true, "rearLeft": true, "rearRight": true},
///     "seatHeater": {"frontLeft": false, "frontRight": false, "rearLeft": false, "rearRight": false},
///     "defrost": {"front": false, "rear": false}
/// }"#;
/// let report = StateReport::from_str(json).unwrap();
///
/// assert!(report.ignition());
/// assert!(report.locks().all_locked());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateReport {
    ignition: bool,
    locks: LockState,
    seat_heaters: SeatHeaterState,
    defrost: DefrostState,
}

/// Raw report shape before required-group validation.
///
/// All groups are optional here so that a missing group surfaces as a
/// distinguishable [`ParseError::MissingField`] rather than an opaque
/// serde error naming only the innermost field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReport {
    #[serde(default)]
    car_on: Option<bool>,

    #[serde(default)]
    car_lock: Option<LockState>,

    #[serde(default)]
    seat_heater: Option<SeatHeaterState>,

    #[serde(default)]
    defrost: Option<DefrostState>,
}

impl StateReport {
    /// Decodes a report from a JSON value.
    ///
    /// If the payload carries a top-level `"states"` object, that object is
    /// used as the report body; otherwise the payload itself is.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedFormat`] if the payload is not a
    /// JSON object, [`ParseError::MissingField`] if a required group is
    /// absent, and [`ParseError::Json`] if a group has the wrong shape.
    pub fn from_value(payload: serde_json::Value) -> Result<Self, ParseError> {
        let body = match payload {
            serde_json::Value::Object(mut map) => match map.remove("states") {
                Some(serde_json::Value::Object(states)) => states,
                Some(other) => {
                    return Err(ParseError::UnexpectedFormat(format!(
                        "\"states\" is not an object: {other}"
                    )));
                }
                None => map,
            },
            other => {
                return Err(ParseError::UnexpectedFormat(format!(
                    "state report is not an object: {other}"
                )));
            }
        };

        let raw: RawReport = serde_json::from_value(serde_json::Value::Object(body))?;

        Ok(Self {
            ignition: raw
                .car_on
                .ok_or_else(|| ParseError::MissingField("carOn".to_string()))?,
            locks: raw
                .car_lock
                .ok_or_else(|| ParseError::MissingField("carLock".to_string()))?,
            seat_heaters: raw
                .seat_heater
                .ok_or_else(|| ParseError::MissingField("seatHeater".to_string()))?,
            defrost: raw
                .defrost
                .ok_or_else(|| ParseError::MissingField("defrost".to_string()))?,
        })
    }

    /// Decodes a report from a JSON string.
    ///
    /// # Errors
    ///
    /// See [`StateReport::from_value`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, ParseError> {
        let payload: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(payload)
    }

    /// Returns whether the ignition is on.
    #[must_use]
    pub fn ignition(&self) -> bool {
        self.ignition
    }

    /// Returns the reported door lock state.
    #[must_use]
    pub fn locks(&self) -> LockState {
        self.locks
    }

    /// Returns the reported seat heater state.
    #[must_use]
    pub fn seat_heaters(&self) -> SeatHeaterState {
        self.seat_heaters
    }

    /// Returns the reported defrost state.
    #[must_use]
    pub fn defrost(&self) -> DefrostState {
        self.defrost
    }

    /// Converts the report into per-category state changes.
    ///
    /// Groups are ordered locks, seat heaters, defrost, ignition, matching
    /// the order in which the categories are applied during a refresh.
    #[must_use]
    pub fn to_state_changes(&self) -> Vec<StateChange> {
        vec![
            StateChange::Locks(self.locks),
            StateChange::SeatHeaters(self.seat_heaters),
            StateChange::Defrost(self.defrost),
            StateChange::Ignition(self.ignition),
        ]
    }
}
