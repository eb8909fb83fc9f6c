//! Resolver fallback behavior against mock registry servers.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use whoip_client::{RdapClient, RdapError, RegistryEndpoint};

const REGISTRIES: [&str; 5] = ["ARIN", "APNIC", "RIPE", "LACNIC", "AFRINIC"];

/// Point all five catalog entries at one mock server, each under its own
/// path prefix, so individual registries can be scripted independently.
fn client_for(server: &MockServer) -> RdapClient {
    let endpoints = REGISTRIES
        .iter()
        .map(|name| {
            RegistryEndpoint::new(
                *name,
                format!("{}/{}/ip/", server.uri(), name.to_lowercase()),
            )
        })
        .collect();
    RdapClient::builder().endpoints(endpoints).build()
}

fn registry_path(name: &str, ip: &str) -> String {
    format!("/{}/ip/{ip}", name.to_lowercase())
}

#[tokio::test]
async fn primary_success_is_normalized_without_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(registry_path("ARIN", "8.8.8.8")))
        .and(header("accept", "application/rdap+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "startAddress": "8.8.8.0",
            "endAddress": "8.8.8.255",
            "port43": "whois.arin.net"
        })))
        .expect(1)
        .mount(&server)
        .await;

    for name in &REGISTRIES[1..] {
        Mock::given(method("GET"))
            .and(path(registry_path(name, "8.8.8.8")))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let report = client_for(&server).lookup("8.8.8.8").await.unwrap();
    assert_eq!(report.network.range, "8.8.8.0 - 8.8.8.255");
    assert_eq!(report.network.source_registry, "ARIN");
}

#[tokio::test]
async fn fallback_stops_at_first_authoritative_registry() {
    let server = MockServer::start().await;
    let ip = "193.0.6.139";

    Mock::given(method("GET"))
        .and(path(registry_path("ARIN", ip)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(registry_path("APNIC", ip)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(registry_path("RIPE", ip)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "handle": "RIPE-BLOCK-1",
            "startAddress": "193.0.0.0",
            "endAddress": "193.0.7.255"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Probing must stop at the first success.
    for name in ["LACNIC", "AFRINIC"] {
        Mock::given(method("GET"))
            .and(path(registry_path(name, ip)))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let document = client_for(&server).resolve(ip).await.unwrap();
    assert_eq!(document.handle.as_deref(), Some("RIPE-BLOCK-1"));
    assert_eq!(document.start_address.as_deref(), Some("193.0.0.0"));
}

#[tokio::test]
async fn redirect_from_primary_triggers_fallback() {
    let server = MockServer::start().await;
    let ip = "1.1.1.1";

    Mock::given(method("GET"))
        .and(path(registry_path("ARIN", ip)))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "https://rdap.apnic.net/ip/1.1.1.1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(registry_path("APNIC", ip)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "handle": "APNIC-1-1-1-0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let document = client_for(&server).resolve(ip).await.unwrap();
    assert_eq!(document.handle.as_deref(), Some("APNIC-1-1-1-0"));
}

#[tokio::test]
async fn exhausted_catalog_names_the_queried_address() {
    let server = MockServer::start().await;
    let ip = "203.0.113.9";

    for name in REGISTRIES {
        Mock::given(method("GET"))
            .and(path(registry_path(name, ip)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
    }

    let err = client_for(&server).resolve(ip).await.unwrap_err();
    assert!(matches!(err, RdapError::Exhausted { .. }));
    assert_eq!(
        err.to_string(),
        "Unable to fetch information for IP 203.0.113.9"
    );
}

#[tokio::test]
async fn primary_server_error_skips_fallbacks() {
    let server = MockServer::start().await;
    let ip = "198.51.100.1";

    Mock::given(method("GET"))
        .and(path(registry_path("ARIN", ip)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    for name in &REGISTRIES[1..] {
        Mock::given(method("GET"))
            .and(path(registry_path(name, ip)))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let err = client_for(&server).resolve(ip).await.unwrap_err();
    assert!(matches!(err, RdapError::Exhausted { .. }));
}

#[tokio::test]
async fn lookup_json_error_shape_is_flat() {
    let server = MockServer::start().await;
    let ip = "203.0.113.9";

    for name in REGISTRIES {
        Mock::given(method("GET"))
            .and(path(registry_path(name, ip)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
    }

    let value = client_for(&server).lookup_json(ip).await;
    assert_eq!(
        value,
        json!({ "error": "Unable to fetch information for IP 203.0.113.9" })
    );
}

#[tokio::test]
async fn lookup_json_success_carries_no_error_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(registry_path("ARIN", "8.8.8.8")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "startAddress": "8.8.8.0",
            "endAddress": "8.8.8.255"
        })))
        .mount(&server)
        .await;

    let value = client_for(&server).lookup_json("8.8.8.8").await;
    assert!(value.get("error").is_none());
    assert_eq!(value["network"]["range"], "8.8.8.0 - 8.8.8.255");
    assert_eq!(value["entities"], json!([]));
}

#[tokio::test]
async fn transport_failure_surfaces_underlying_message() {
    // Nothing listens on the discard port; the connection attempt fails.
    let endpoints = vec![RegistryEndpoint::new("ARIN", "http://127.0.0.1:9/ip/")];
    let client = RdapClient::builder().endpoints(endpoints).build();

    let err = client.resolve("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, RdapError::Http(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn non_json_body_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(registry_path("ARIN", "8.8.8.8")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not rdap</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).resolve("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, RdapError::Json(_)));
}
