//! GraphQL API for the story backlog.
//!
//! Serves the same pipeline the CLI runs, plus CRUD over the in-process
//! backlog, for AI agents and automation tools.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! storycraft serve --port 4000
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `story`, `stories`, `stats`
//! - **Mutations**: `transformNotes`, `setTestStatus`, `validateStory`, `deleteStory`

mod schema;
mod types;

pub use schema::{AppState, StorycraftSchema, build_schema};
pub use types::*;

use crate::error::Result;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};

async fn playground() -> Html<String> {
    Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

/// Serve the schema over HTTP until the process is stopped.
pub async fn run_server(schema: StorycraftSchema, port: u16) -> Result<()> {
    let app = Router::new().route("/", get(playground).post_service(GraphQL::new(schema)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port = port, "GraphQL server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
