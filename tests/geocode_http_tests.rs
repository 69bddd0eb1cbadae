//! HttpGeocoder against a local stub serving recorded responses.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use reqwest::StatusCode;

use route_planner::error::GeocodeError;
use route_planner::geocode::{GeocoderConfig, HttpGeocoder};
use route_planner::traits::Geocoder;
use route_planner::Coordinates;

// ============================================================================
// Test Fixtures
// ============================================================================

const WYNN: &str = r#"[{"place_id": 1, "lat": "36.1263781", "lon": "-115.1658180",
    "display_name": "Wynn Las Vegas, 3131 Las Vegas Blvd S"}]"#;

/// Serves one canned response per connection, then hands back each request head.
struct StubServer {
    base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            responses
                .into_iter()
                .map(|(status, body)| {
                    let (mut stream, _) = listener.accept().unwrap();
                    let mut reader = BufReader::new(stream.try_clone().unwrap());

                    let mut head = String::new();
                    loop {
                        let mut line = String::new();
                        if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                            break;
                        }
                        head.push_str(&line);
                    }

                    let reason = if status == 200 { "OK" } else { "Internal Server Error" };
                    write!(
                        stream,
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason,
                        body.len(),
                        body
                    )
                    .unwrap();
                    head
                })
                .collect()
        });

        Self { base_url, handle }
    }

    fn requests(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

fn request_line(head: &str) -> &str {
    head.lines().next().unwrap_or_default()
}

fn geocoder(base_url: &str, api_key: Option<&str>) -> HttpGeocoder {
    let config = GeocoderConfig {
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        ..GeocoderConfig::default()
    };
    // Keep system proxy settings away from the loopback stub.
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .user_agent(config.user_agent.clone())
        .build()
        .unwrap();
    HttpGeocoder::with_client(config, client)
}

// ============================================================================
// Requests
// ============================================================================

#[test]
fn sends_search_query_and_parses_first_place() {
    let server = StubServer::start(vec![(200, WYNN)]);
    // Trailing slash on the base URL must not double up.
    let base = format!("{}/", server.base_url);

    let coordinates = geocoder(&base, None)
        .geocode("  3131 Las Vegas Blvd S ")
        .unwrap();
    assert_eq!(coordinates, Coordinates::new(36.1263781, -115.1658180));

    let requests = server.requests();
    assert_eq!(
        request_line(&requests[0]),
        "GET /search?format=json&limit=1&q=3131+Las+Vegas+Blvd+S HTTP/1.1"
    );
    assert!(requests[0].to_lowercase().contains("user-agent: route-planner/"));
}

#[test]
fn appends_api_key_when_configured() {
    let server = StubServer::start(vec![(200, WYNN)]);

    geocoder(&server.base_url, Some("secret"))
        .geocode("Wynn")
        .unwrap();

    let requests = server.requests();
    assert_eq!(
        request_line(&requests[0]),
        "GET /search?format=json&limit=1&q=Wynn&key=secret HTTP/1.1"
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn server_error_maps_to_http() {
    let server = StubServer::start(vec![(500, r#"{"error": "overloaded"}"#)]);

    let err = geocoder(&server.base_url, None).geocode("Wynn").unwrap_err();
    match err {
        GeocodeError::Http(inner) => {
            assert_eq!(inner.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        }
        other => panic!("expected Http error, got {:?}", other),
    }
    server.requests();
}

#[test]
fn empty_result_maps_to_no_match() {
    let server = StubServer::start(vec![(200, "[]")]);

    let err = geocoder(&server.base_url, None)
        .geocode("Nowhere 123")
        .unwrap_err();
    assert!(matches!(err, GeocodeError::NoMatch { ref address } if address == "Nowhere 123"));
    server.requests();
}

#[test]
fn malformed_body_maps_to_http() {
    let server = StubServer::start(vec![(200, "<html>maintenance</html>")]);

    let err = geocoder(&server.base_url, None).geocode("Wynn").unwrap_err();
    assert!(matches!(err, GeocodeError::Http(ref inner) if inner.is_decode()));
    server.requests();
}
