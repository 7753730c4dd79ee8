//! Requests that outlive the HTTP timeout, against a local server that
//! answers its first request and then stops responding.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rota_core::{FieldRole, RouteError, TravelMode};
use rota_mapbox::{MapboxClient, MapboxConfig};
use rota_sdk::{resolve_address, AddressResolver, NoopPresenter, RouteFetcher, RouteSession};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PLACES: &str = r#"{"type":"FeatureCollection","features":[
    {"place_name":"Praça da Sé, São Paulo - SP, Brasil","center":[-46.6333,-23.5505]}
]}"#;

/// Serves `answered` requests with one geocoding feature, then holds every
/// later connection open without replying.
async fn stalling_server(answered: usize) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let served = Arc::new(AtomicUsize::new(0));

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let served = served.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                if served.fetch_add(1, Ordering::SeqCst) < answered {
                    let response = format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        PLACES.len(),
                        PLACES
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                } else {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                }
            });
        }
    });

    addr
}

fn client(addr: SocketAddr) -> Arc<MapboxClient> {
    let mut config = MapboxConfig::new("pk.test");
    config.base_url = format!("http://{}", addr);
    config.http_timeout = Duration::from_millis(200);
    Arc::new(MapboxClient::new(config).unwrap())
}

#[tokio::test]
async fn suggestion_timeout_keeps_previous_list() {
    let client = client(stalling_server(1).await);
    let mut resolver = AddressResolver::new(client);

    let first = resolver.suggest("Praça da Sé", FieldRole::Origin).await;
    assert_eq!(first.len(), 1);

    let after_timeout = resolver.suggest("Praça da Sé, Centro", FieldRole::Origin).await;
    assert_eq!(after_timeout, first);
    assert_eq!(resolver.text(FieldRole::Origin), "Praça da Sé, Centro");
}

#[tokio::test]
async fn resolve_timeout_is_provider_unavailable() {
    let client = client(stalling_server(0).await);

    let err = resolve_address(client.as_ref(), "Avenida Paulista")
        .await
        .unwrap_err();

    assert!(matches!(err, RouteError::ProviderUnavailable(_)), "{err:?}");
}

#[tokio::test]
async fn route_timeout_leaves_session_empty() {
    let client = client(stalling_server(0).await);
    let mut session = RouteSession::new(RouteFetcher::new(client.clone(), client));

    let err = session
        .compute_route(
            "Praça da Sé",
            "Avenida Paulista",
            TravelMode::Driving,
            &mut NoopPresenter,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RouteError::ProviderUnavailable(_)), "{err:?}");
    assert!(session.active().is_none());
}
