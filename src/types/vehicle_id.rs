// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vehicle identity and authentication types.

use std::fmt;

use crate::error::ValueError;

/// Identifier of a vehicle as assigned by the vehicle API.
///
/// # Examples
///
/// ```
/// use carlink_lib::types::VehicleId;
///
/// let id = VehicleId::new("V-1").unwrap();
/// assert_eq!(id.as_str(), "V-1");
///
/// // Empty or whitespace-containing ids are rejected
/// assert!(VehicleId::new("").is_err());
/// assert!(VehicleId::new("V 1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleId(String);

impl VehicleId {
    /// Creates a new vehicle id.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidVehicleId`] if the id is empty or
    /// contains whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(ValueError::InvalidVehicleId(id));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for VehicleId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Bearer token used to authenticate against the vehicle API.
///
/// The token is not validated locally. `Debug` output is redacted so the
/// token cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(***)")
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_vehicle_id() {
        let id = VehicleId::new("V-1").unwrap();
        assert_eq!(id.as_str(), "V-1");
        assert_eq!(id.to_string(), "V-1");
    }

    #[test]
    fn empty_vehicle_id_rejected() {
        assert!(matches!(
            VehicleId::new(""),
            Err(ValueError::InvalidVehicleId(_))
        ));
    }

    #[test]
    fn whitespace_vehicle_id_rejected() {
        assert!(VehicleId::new("V 1").is_err());
        assert!(VehicleId::new("V\t1").is_err());
    }

    #[test]
    fn vehicle_id_from_str() {
        let id: VehicleId = "V-42".parse().unwrap();
        assert_eq!(id.as_str(), "V-42");
    }

    #[test]
    fn auth_token_debug_is_redacted() {
        let token = AuthToken::new("super-secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }
}
