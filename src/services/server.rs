use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{AppState, create_router};
use crate::services::tournament::TournamentService;

pub struct ServerService {
    port: u16,
    state: Arc<AppState>,
}

impl ServerService {
    pub fn new(port: u16, tournament: TournamentService, export_file_name: &str) -> Self {
        Self {
            port,
            state: Arc::new(AppState::new(tournament, export_file_name)),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let app = create_router(self.state.clone()).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([127, 0, 0, 1], self.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Server listening on {}", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}
