//! Shared fixtures for the HTTP contract tests.

use adboard::fixtures::{advertisement_data, session_seller_id};
use adboard::{Advertisement, AdvertisementPayload};
use adboard_http::client::AdboardClient;
use adboard_http::config::{BASE_URL_ENV, ClientConfig};
use adboard_http::stub::spawn_stub;
use std::sync::{OnceLock, mpsc};
use std::thread;

static SERVICE_BASE_URL: OnceLock<String> = OnceLock::new();

/// `ADBOARD_BASE_URL` when set, otherwise a stub shared by the whole binary.
pub fn service_base_url() -> &'static str {
    SERVICE_BASE_URL.get_or_init(|| match std::env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => start_local_stub(),
    })
}

// Each #[tokio::test] owns a runtime that dies with the test, so the shared
// stub gets a runtime on its own thread.
fn start_local_stub() -> String {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("adboard-stub".to_string())
        .spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("Failed to build stub runtime");
            runtime.block_on(async move {
                let (addr, handle) = spawn_stub().await.expect("Failed to start contract stub");
                tx.send(addr).expect("Test thread stopped waiting for the stub");
                let _ = handle.await;
            });
        })
        .expect("Failed to spawn stub thread");
    let addr = rx.recv().expect("Contract stub did not report its address");
    eprintln!("Running contract tests against local stub on http://{addr}");
    format!("http://{addr}")
}

pub struct TestClient {
    pub api: AdboardClient,
}

impl TestClient {
    pub fn new() -> Self {
        adboard::telemetry::init_for_tests();
        let config = ClientConfig::from_env()
            .and_then(|config| config.with_overrides(Some(service_base_url()), None))
            .expect("Invalid client configuration");
        let api = AdboardClient::new(&config).expect("Failed to build client");
        Self { api }
    }

    /// Creates `payload`, failing the test unless the service answers 200.
    pub async fn create(&self, payload: &AdvertisementPayload) -> Advertisement {
        let response = self
            .api
            .create_item(payload)
            .await
            .expect("Create request failed");
        assert_eq!(response.status(), 200, "creating {payload:?}");
        response
            .json()
            .await
            .expect("Failed to parse created advertisement")
    }

    /// The default advertisement for the session seller.
    pub async fn created_advertisement(&self) -> Advertisement {
        self.create(&advertisement_data(session_seller_id())).await
    }
}
