// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the vehicle API client using wiremock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use carlink_lib::protocol::ApiClient;
use carlink_lib::state::LockState;
use carlink_lib::types::VehicleId;
use carlink_lib::{Error, ParseError, ProtocolError, Vehicle};
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn full_state_body() -> serde_json::Value {
    serde_json::json!({
        "carOn": true,
        "carLock": {
            "frontLeft": true, "frontRight": true, "rearLeft": true, "rearRight": true
        },
        "seatHeater": {
            "frontLeft": false, "frontRight": false, "rearLeft": false, "rearRight": false
        },
        "defrost": {"front": false, "rear": false}
    })
}

fn vehicle_for(mock_server: &MockServer) -> Vehicle {
    let client = ApiClient::new(mock_server.uri()).unwrap();
    Vehicle::with_client(client, VehicleId::new("V-1").unwrap())
}

// ============================================================================
// ApiClient Tests
// ============================================================================

mod api_client {
    use super::*;

    #[tokio::test]
    async fn fetches_state_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_state_body()))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let id = VehicleId::new("V-1").unwrap();

        let payload = client.vehicle_state(&id).await.unwrap();
        assert_eq!(payload["carOn"], serde_json::json!(true));
    }

    #[tokio::test]
    async fn sends_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .and(bearer_token("session-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_state_body()))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri())
            .unwrap()
            .with_token("session-token");
        let id = VehicleId::new("V-1").unwrap();

        assert!(client.vehicle_state(&id).await.is_ok());
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let id = VehicleId::new("V-1").unwrap();

        let err = client.vehicle_state(&id).await.unwrap_err();
        assert!(matches!(err, ProtocolError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn server_error_without_body_references_status_code() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let id = VehicleId::new("V-1").unwrap();

        let err = client.vehicle_state(&id).await.unwrap_err();
        match err {
            ProtocolError::Status { code, message } => {
                assert_eq!(code, 500);
                assert!(message.contains("500"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_with_body_carries_server_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("vehicle offline"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).unwrap();
        let id = VehicleId::new("V-1").unwrap();

        let err = client.vehicle_state(&id).await.unwrap_err();
        match err {
            ProtocolError::Status { code, message } => {
                assert_eq!(code, 503);
                assert_eq!(message, "vehicle offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_http_error() {
        // Use a port that's definitely not listening
        let client = ApiClient::new("127.0.0.1:59999").unwrap();
        let id = VehicleId::new("V-1").unwrap();

        let err = client.vehicle_state(&id).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Http(_)));
    }
}

// ============================================================================
// Vehicle Refresh Tests
// ============================================================================

mod vehicle_refresh {
    use super::*;

    #[tokio::test]
    async fn refresh_applies_report_and_notifies() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_state_body()))
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        let ignition_count = Arc::new(AtomicU32::new(0));
        let counter = ignition_count.clone();

        vehicle.on_ignition_changed(move |on| {
            assert!(on);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Ignition starts false; the report flips it to true
        assert!(!vehicle.ignition());
        vehicle.refresh().await.unwrap();

        assert!(vehicle.ignition());
        assert_eq!(ignition_count.load(Ordering::SeqCst), 1);
        assert!(vehicle.state().last_updated().is_some());
    }

    #[tokio::test]
    async fn refresh_skips_unchanged_categories() {
        let mock_server = MockServer::start().await;

        // Locks and heaters match the defaults; only ignition differs
        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_state_body()))
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        let lock_count = Arc::new(AtomicU32::new(0));
        let counter = lock_count.clone();

        vehicle.on_locks_changed(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        vehicle.refresh().await.unwrap();
        assert_eq!(lock_count.load(Ordering::SeqCst), 0);

        // A second identical refresh notifies nobody
        let ignition_count = Arc::new(AtomicU32::new(0));
        let counter = ignition_count.clone();
        vehicle.on_ignition_changed(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        vehicle.refresh().await.unwrap();
        assert_eq!(ignition_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn refresh_unwraps_states_wrapper() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"states": full_state_body()})),
            )
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        vehicle.refresh().await.unwrap();

        assert!(vehicle.ignition());
        assert!(vehicle.locks().all_locked());
    }

    #[tokio::test]
    async fn refresh_applies_lock_changes() {
        let mock_server = MockServer::start().await;

        let mut body = full_state_body();
        body["carLock"]["frontLeft"] = serde_json::json!(false);

        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        let received = Arc::new(parking_lot::RwLock::new(None::<LockState>));
        let received_clone = received.clone();

        vehicle.on_locks_changed(move |locks| {
            *received_clone.write() = Some(locks);
        });

        vehicle.refresh().await.unwrap();

        assert_eq!(
            *received.read(),
            Some(LockState::new(false, true, true, true))
        );
    }

    #[tokio::test]
    async fn refresh_failure_returns_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        let err = vehicle.refresh().await.unwrap_err();

        match err {
            Error::Protocol(ProtocolError::Status { code, message }) => {
                assert_eq!(code, 500);
                assert!(message.contains("500"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn refresh_with_missing_group_leaves_snapshot_untouched() {
        let mock_server = MockServer::start().await;

        // carLock group absent from an otherwise successful response
        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "carOn": true,
                "seatHeater": {
                    "frontLeft": true, "frontRight": true, "rearLeft": true, "rearRight": true
                },
                "defrost": {"front": true, "rear": true}
            })))
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        let notified = Arc::new(AtomicU32::new(0));
        let counter = notified.clone();

        vehicle.on_state_changed(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let err = vehicle.refresh().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::MissingField(ref field)) if field == "carLock"
        ));

        // Nothing was applied: no notifications, defaults intact
        assert_eq!(notified.load(Ordering::SeqCst), 0);
        assert!(!vehicle.ignition());
        assert!(!vehicle.seat_heaters().any_on());
        assert!(vehicle.state().last_updated().is_none());
    }

    #[tokio::test]
    async fn refresh_with_invalid_json_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        assert!(vehicle.refresh().await.is_err());
    }

    #[tokio::test]
    async fn unsubscribed_observer_is_silent_across_refreshes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vehicles/V-1/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(full_state_body()))
            .mount(&mock_server)
            .await;

        let vehicle = vehicle_for(&mock_server);
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();

        let sub = vehicle.on_ignition_changed(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(vehicle.unsubscribe(sub));

        vehicle.refresh().await.unwrap();

        assert!(vehicle.ignition());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
