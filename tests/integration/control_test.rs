use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use aquaflow::core::control::{self, ControlAction};
use aquaflow::core::telemetry::SnapshotClient;

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

#[test]
fn test_accepted_command_requests_refresh() {
    let endpoint = serve_once("200 OK", r#"{"success":true,"message":"VALVE_A status updated"}"#);
    let client = SnapshotClient::new(endpoint);

    let outcome = control::execute(&client, &ControlAction::ToggleValve("VALVE_A".into())).unwrap();

    assert!(outcome.accepted);
    assert!(outcome.refresh);
    assert_eq!(outcome.message, "VALVE_A status updated");
}

#[test]
fn test_maintenance_notification_skips_refresh() {
    let endpoint = serve_once("200 OK", r#"{"success":true}"#);
    let client = SnapshotClient::new(endpoint);

    let outcome = control::execute(&client, &ControlAction::NotifyMaintenance).unwrap();

    assert!(outcome.accepted);
    assert!(!outcome.refresh);
    // Fallback completion message when the ack carries none
    assert_eq!(outcome.message, "Maintenance team acknowledged");
}

#[test]
fn test_rejected_command_does_not_refresh() {
    let endpoint = serve_once(
        "200 OK",
        r#"{"success":false,"message":"Valve is locked out"}"#,
    );
    let client = SnapshotClient::new(endpoint);

    let outcome =
        control::execute(&client, &ControlAction::ToggleTap("TAP1".into())).unwrap();

    assert!(!outcome.accepted);
    assert!(!outcome.refresh);
    assert_eq!(outcome.message, "Valve is locked out");
}

#[test]
fn test_http_failure_propagates() {
    let endpoint = serve_once("503 Service Unavailable", "{}");
    let client = SnapshotClient::new(endpoint);

    assert!(control::execute(&client, &ControlAction::EmergencyShutdown).is_err());
}

#[test]
fn test_cli_action_parsing() {
    assert_eq!(
        ControlAction::from_cli("isolate-leak", Some("TANK-S1")),
        Ok(ControlAction::IsolateLeak("TANK-S1".into()))
    );
    assert_eq!(
        ControlAction::from_cli("notify-maintenance", None),
        Ok(ControlAction::NotifyMaintenance)
    );
    assert!(ControlAction::from_cli("isolate-leak", None).is_err());
}
