//! HTTP tests for `TelemetryClient` against a mock telemetry server.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use ets2_telemetry_client::{
    ClientConfig, ErrorKind, TELEMETRY_PATH, TelemetryClient, TelemetryError, TelemetrySource,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const DRIVING: &[u8] = include_bytes!("../testdata/driving.json");

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TELEMETRY_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_get_telemetry_success() -> TestResult {
    let server = serve(ResponseTemplate::new(200).set_body_raw(DRIVING, "application/json")).await;

    let client = TelemetryClient::new(server.uri())?;
    let t = client.get_telemetry().await?;

    assert!(t.game.connected);
    assert_eq!(t.truck.make, "Scania");
    assert_eq!(t.navigation.speed_limit, 80);
    Ok(())
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() -> TestResult {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({
        "game": { "connected": true }
    })))
    .await;

    let client = TelemetryClient::new(format!("{}/", server.uri()))?;
    let t = client.get_telemetry().await?;
    assert!(t.game.connected);
    Ok(())
}

#[tokio::test]
async fn test_disconnected_game_payload() -> TestResult {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({
        "game": { "connected": false },
        "futureField": 123
    })))
    .await;

    let t = TelemetryClient::new(server.uri())?.get_telemetry().await?;
    assert!(!t.game.connected);
    assert!(t.truck.id.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_server_error_maps_to_unexpected_status() -> TestResult {
    let server = serve(ResponseTemplate::new(500).set_body_raw(DRIVING, "application/json")).await;

    let client = TelemetryClient::new(server.uri())?;
    match client.get_telemetry().await {
        Err(TelemetryError::UnexpectedStatus { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with(TELEMETRY_PATH), "url={url}");
        }
        other => return Err(format!("expected UnexpectedStatus, got {other:?}").into()),
    }
    Ok(())
}

#[tokio::test]
async fn test_non_200_success_codes_rejected() -> TestResult {
    for code in [201u16, 204] {
        let server = serve(ResponseTemplate::new(code)).await;
        let err = match TelemetryClient::new(server.uri())?.get_telemetry().await {
            Err(e) => e,
            Ok(t) => return Err(format!("status {code} returned a snapshot: {t:?}").into()),
        };
        assert_eq!(err.status(), Some(code));
        assert!(err.is_transient());
    }
    Ok(())
}

#[tokio::test]
async fn test_unknown_path_is_404() -> TestResult {
    // Nothing mounted: wiremock answers 404.
    let server = MockServer::start().await;
    let err = match TelemetryClient::new(server.uri())?.get_telemetry().await {
        Err(e) => e,
        Ok(_) => return Err("404 must not produce a snapshot".into()),
    };
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(404));
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() -> TestResult {
    let server = serve(ResponseTemplate::new(200).set_body_string("not json")).await;

    match TelemetryClient::new(server.uri())?.get_telemetry().await {
        Err(TelemetryError::Decode { payload, .. }) => assert_eq!(payload, "not json"),
        other => return Err(format!("expected Decode, got {other:?}").into()),
    }
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() -> TestResult {
    // Bind then release a port so nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };

    let client = TelemetryClient::new(format!("http://127.0.0.1:{port}"))?;
    let err = match client.get_telemetry().await {
        Err(e) => e,
        Ok(_) => return Err("nothing is listening, request must fail".into()),
    };
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_transient());
    assert!(std::error::Error::source(&err).is_some());
    Ok(())
}

#[tokio::test]
async fn test_body_dropped_mid_read_is_transport_error() -> TestResult {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    // Promise 1000 bytes, send a few, then hang up.
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await?;
        let mut request = Vec::new();
        let mut chunk = [0u8; 512];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(chunk.get(..n).unwrap_or_default());
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\n{\"game\":")
            .await?;
        socket.shutdown().await
    });

    let client = TelemetryClient::new(format!("http://{addr}"))?;
    let result = client.get_telemetry().await;
    server.await??;

    match result {
        Err(TelemetryError::Transport { url, source }) => {
            assert!(url.ends_with(TELEMETRY_PATH));
            assert!(!source.is_timeout());
        }
        other => return Err(format!("expected Transport error, got {other:?}").into()),
    }
    Ok(())
}

#[tokio::test]
async fn test_request_timeout_is_transport_error() -> TestResult {
    let server = serve(
        ResponseTemplate::new(200)
            .set_body_raw(DRIVING, "application/json")
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let config = ClientConfig::new(server.uri()).with_timeout(Some(Duration::from_millis(100)));
    let client = TelemetryClient::with_config(config)?;

    match client.get_telemetry().await {
        Err(TelemetryError::Transport { source, .. }) => assert!(source.is_timeout()),
        other => return Err(format!("expected Transport timeout, got {other:?}").into()),
    }
    Ok(())
}

#[tokio::test]
async fn test_source_trait_delegates_to_client() -> TestResult {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({
        "navigation": { "speedLimit": 90 }
    })))
    .await;

    let source: Box<dyn TelemetrySource> = Box::new(TelemetryClient::new(server.uri())?);
    let t = source.get_telemetry().await?;
    assert_eq!(t.navigation.speed_limit, 90);
    Ok(())
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

/// Answers every request with a document stamped with a unique sequence number.
struct SequencedTelemetry {
    next: AtomicI64,
}

impl Respond for SequencedTelemetry {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(json!({
            "game": { "connected": true },
            "truck": { "id": format!("truck-{n}"), "gear": n },
            "job": { "income": n * 10 },
            "navigation": { "estimatedDistance": n }
        }))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_are_independent() -> TestResult {
    const CALLS: i64 = 16;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TELEMETRY_PATH))
        .respond_with(SequencedTelemetry {
            next: AtomicI64::new(0),
        })
        .expect(u64::try_from(CALLS)?)
        .mount(&server)
        .await;

    let client = Arc::new(TelemetryClient::new(server.uri())?);
    let mut tasks = JoinSet::new();
    for _ in 0..CALLS {
        let client = Arc::clone(&client);
        tasks.spawn(async move { client.get_telemetry().await });
    }

    let mut seen = BTreeSet::new();
    while let Some(joined) = tasks.join_next().await {
        let t = joined??;
        let n = t.navigation.estimated_distance;
        assert_eq!(t.truck.id, format!("truck-{n}"));
        assert_eq!(t.truck.gear, n);
        assert_eq!(t.job.income, n * 10);
        assert!(seen.insert(n), "sequence {n} returned twice");
    }

    assert_eq!(seen, (0..CALLS).collect::<BTreeSet<_>>());
    server.verify().await;
    Ok(())
}
