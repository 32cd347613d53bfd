use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use aquaflow::core::telemetry::SnapshotClient;
use aquaflow::ui::dashboard::{DashboardApp, DashboardAppConfig};
use aquaflow::AquaError;

/// Serve one canned HTTP response on a local port and return the base URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

/// A base URL on which nothing is listening.
fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[test]
fn test_fetch_snapshot_success() {
    let endpoint = serve_once(
        "200 OK",
        r#"{"valves":{"TANK_VALVE":1},"water_level":42.0,"sensors":{"pH":7.1}}"#,
    );

    let client = SnapshotClient::new(endpoint);
    let snapshot = client.fetch_snapshot().unwrap();

    assert_eq!(snapshot.water_level, 42.0);
    assert_eq!(snapshot.sensors.ph, Some(7.1));
    assert_eq!(snapshot.valves.len(), 1);
}

#[test]
fn test_fetch_snapshot_http_failure() {
    let endpoint = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);

    let client = SnapshotClient::new(endpoint);
    match client.fetch_snapshot() {
        Err(AquaError::Http { status }) => assert_eq!(status, 500),
        Err(other) => panic!("expected Http error, got {}", other),
        Ok(_) => panic!("expected Http error, got a snapshot"),
    }
}

#[test]
fn test_fetch_snapshot_network_failure() {
    let client = SnapshotClient::new(dead_endpoint());
    match client.fetch_snapshot() {
        Err(err) => assert!(err.is_transient()),
        Ok(_) => panic!("expected network failure"),
    }
}

#[test]
fn test_check_leaks_report() {
    let endpoint = serve_once(
        "200 OK",
        r#"{"total_active":2,"total_pipes":15,"inactive_leak_count":1,"active_leaks":["TANK-S1","S1-S2"]}"#,
    );

    let client = SnapshotClient::new(endpoint);
    let report = client.check_leaks().unwrap();

    assert_eq!(report.total_active, 2);
    assert_eq!(report.total_pipes, Some(15));
    assert_eq!(report.active_leaks, vec!["TANK-S1", "S1-S2"]);
}

#[test]
fn test_failed_poll_preserves_snapshot_and_notifies_once() {
    let endpoint = serve_once("500 Internal Server Error", "{}");

    let mut app = DashboardApp::new(DashboardAppConfig {
        endpoint,
        interval_secs: 30,
        auto_refresh: false,
    });

    // Seed state from a previous successful poll
    app.snapshot = Some(serde_json::from_str(r#"{"water_level":77.0,"taps":{"TAP1":1}}"#).unwrap());

    assert!(!app.refresh());

    // Previously rendered values are untouched
    let snapshot = app.snapshot.as_ref().unwrap();
    assert_eq!(snapshot.water_level, 77.0);
    assert_eq!(snapshot.taps.len(), 1);

    // Exactly one failure notice was emitted
    assert_eq!(app.notifications.len(), 1);
}

#[test]
fn test_successful_poll_replaces_snapshot() {
    let endpoint = serve_once("200 OK", r#"{"water_level":12.0}"#);

    let mut app = DashboardApp::new(DashboardAppConfig {
        endpoint,
        interval_secs: 30,
        auto_refresh: false,
    });
    app.snapshot = Some(serde_json::from_str(r#"{"water_level":90.0,"taps":{"TAP1":1}}"#).unwrap());

    assert!(app.refresh());

    let snapshot = app.snapshot.as_ref().unwrap();
    assert_eq!(snapshot.water_level, 12.0);
    // Wholesale replacement, not a merge
    assert!(snapshot.taps.is_empty());
    assert!(app.last_update.is_some());
}
