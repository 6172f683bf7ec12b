use beacon_result::Result;
use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// # Node Configuration
#[derive(Serialize, JsonSchema, Debug)]
pub struct NodeInfo {
    /// Server version
    pub version: String,
    /// URL of the web app
    pub app: String,
}

/// # Query Node
///
/// Fetch the server's version and public configuration.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Result<Json<NodeInfo>> {
    let config = beacon_config::config().await;

    Ok(Json(NodeInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app: config.hosts.app,
    }))
}
