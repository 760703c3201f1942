// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for `CarLink` Lib.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation, API communication, and payload parsing.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when tracking
/// or refreshing vehicle state.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the vehicle API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a state report.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A vehicle identifier is empty or contains whitespace.
    #[error("invalid vehicle id: {0:?}")]
    InvalidVehicleId(String),
}

/// Errors related to communication with the vehicle API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    ///
    /// `message` carries the error text supplied by the server, or a
    /// status-code-based fallback when the response body was empty.
    #[error("vehicle API returned HTTP {code}: {message}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// Error text from the server, or a fallback referencing the code.
        message: String,
    },

    /// Authentication failed (HTTP 401).
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing vehicle state reports.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the report.
    #[error("missing field in state report: {0}")]
    MissingField(String),

    /// Unexpected report format.
    #[error("unexpected report format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
