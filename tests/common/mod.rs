#![allow(dead_code)]

use masto_http::{ClientConfig, Instance};
use mockito::Server;

/// Route tracing output through the test harness; ignores repeated calls.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Instance pointing at the plain-HTTP mock server.
pub fn instance_for(server: &Server, access_token: &str) -> Instance {
    init_tracing();
    let config = ClientConfig {
        scheme: "http".into(),
        access_token: Some(access_token.to_string()).filter(|t| !t.is_empty()),
        ..Default::default()
    };
    Instance::with_config(&server.host_with_port(), config).unwrap()
}
