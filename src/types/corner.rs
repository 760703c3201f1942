// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Position types for addressing vehicle state fields.
//!
//! Door locks and seat heaters are tracked per corner of the cabin, while
//! defrost is tracked per windshield zone.

use std::fmt;

/// A corner of the vehicle cabin.
///
/// Door locks and seat heaters are addressed by corner. The wire key names
/// match the fields used by the vehicle API.
///
/// # Examples
///
/// ```
/// use carlink_lib::types::Corner;
///
/// assert_eq!(Corner::FrontLeft.as_key(), "frontLeft");
/// assert_eq!(Corner::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Front-left (driver side in LHD markets).
    FrontLeft,
    /// Front-right.
    FrontRight,
    /// Rear-left.
    RearLeft,
    /// Rear-right.
    RearRight,
}

impl Corner {
    /// All four corners, in wire order.
    pub const ALL: [Self; 4] = [
        Self::FrontLeft,
        Self::FrontRight,
        Self::RearLeft,
        Self::RearRight,
    ];

    /// Returns the wire key name used by the vehicle API.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::FrontLeft => "frontLeft",
            Self::FrontRight => "frontRight",
            Self::RearLeft => "rearLeft",
            Self::RearRight => "rearRight",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// A windshield zone addressed by the defrost controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Front windshield.
    Front,
    /// Rear windshield.
    Rear,
}

impl Zone {
    /// Returns the wire key name used by the vehicle API.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Rear => "rear",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_keys() {
        assert_eq!(Corner::FrontLeft.as_key(), "frontLeft");
        assert_eq!(Corner::FrontRight.as_key(), "frontRight");
        assert_eq!(Corner::RearLeft.as_key(), "rearLeft");
        assert_eq!(Corner::RearRight.as_key(), "rearRight");
    }

    #[test]
    fn corner_display_matches_key() {
        for corner in Corner::ALL {
            assert_eq!(corner.to_string(), corner.as_key());
        }
    }

    #[test]
    fn zone_keys() {
        assert_eq!(Zone::Front.as_key(), "front");
        assert_eq!(Zone::Rear.as_key(), "rear");
    }
}
