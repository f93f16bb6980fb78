use std::collections::HashMap;
use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Router};
use tokio::sync::Mutex;

use reachout::config::{Config, LoggingConfig, RelayConfig, ServerConfig, SiteConfig};
use reachout::routes::AppState;

pub struct MockRelay {
    pub endpoint: String,
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// Stand-in for the external relay service: records every submission body
/// and answers with a fixed status.
pub async fn spawn_relay(status: StatusCode) -> MockRelay {
    let requests: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::new(Mutex::new(Vec::new()));
    let captured = requests.clone();

    let app = Router::new().route(
        "/",
        post(move |body: String| {
            let captured = captured.clone();
            async move {
                let fields = serde_urlencoded::from_str::<HashMap<String, String>>(&body)
                    .unwrap_or_default();
                captured.lock().await.push(fields);

                status
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockRelay { endpoint, requests }
}

pub fn test_config(relay_endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        relay: RelayConfig {
            endpoint: relay_endpoint.to_string(),
            next_url: "http://localhost:3000/".to_string(),
            captcha: false,
            timeout_secs: 5,
        },
        logging: LoggingConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub relay: MockRelay,
}

/// Build the application router against a mock relay that answers with the
/// given status.
pub async fn create_test_app(relay_status: StatusCode) -> TestApp {
    create_prefixed_test_app(relay_status, "").await
}

/// Build the application router with a base path, mounted the way `serve`
/// mounts it: the whole application nested under the prefix.
pub async fn create_prefixed_test_app(relay_status: StatusCode, base_path: &str) -> TestApp {
    let relay = spawn_relay(relay_status).await;
    let mut config = test_config(&relay.endpoint);
    config.site.base_path = base_path.to_string();

    let client = reachout_contact::RelayClient::new(config.relay.client_config()).unwrap();

    let app = reachout::routes::router(AppState {
        config,
        relay: client,
    });

    let router = if base_path.is_empty() {
        app
    } else {
        Router::new().nest(base_path, app)
    };

    TestApp { router, relay }
}
