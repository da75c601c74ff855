//! SSR host for the RAD-ETHIX Leptos client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos shell and serves the `/pkg` WASM bundle. All patient
//! data flows from the browser straight to the external triage backend; this
//! process holds no state and proxies nothing.

#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = config::port_from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "radethix client host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
