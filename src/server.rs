use axum::{Extension, Router, routing::get};
use std::convert::Infallible;
use std::{net::SocketAddr, str::FromStr};

use crate::{
    api, config, error,
    management::FileStore,
    spotify::auth::{AuthFlow, AuthOutcome},
};

pub async fn start_api_server(flow: AuthFlow<FileStore>, outcome: AuthOutcome) {
    let app = Router::new().route("/health", get(api::health)).route(
        "/callback",
        get(api::callback)
            .layer::<_, Infallible>(Extension(flow))
            .layer::<_, Infallible>(Extension(outcome)),
    );

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
