//! Document-list handler
//!
//! The single externally invokable operation: validate the filters, issue
//! one GET to `/list/`, and pass the JSON body through verbatim.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, error};

use reader_common::Result;

use crate::params::validate_list_params;
use crate::session::Session;

/// List documents filtered by location and last modification time.
///
/// The response shape is whatever the Reader API returns (count, results,
/// pagination cursor); it is not validated or transformed here. Upstream
/// HTTP errors, transport failures, and non-JSON bodies are logged and
/// propagated unchanged.
pub async fn list_documents(session: &Session, location: &str, after: &str) -> Result<Value> {
    debug!("list documents @{} after {}", location, after);

    let params = validate_list_params(location, after);
    let result = fetch_list(session, &params).await;

    if let Err(e) = &result {
        error!("Error retrieving document list: {}", e);
    }

    result
}

async fn fetch_list(session: &Session, params: &HashMap<&'static str, String>) -> Result<Value> {
    let response = session.get("/list/").query(params).send().await?;
    let response = response.error_for_status()?;
    let data = response.json::<Value>().await?;
    Ok(data)
}
