//! Documents resource: template advertisement and reads
//!
//! The document list is exposed under a single URI template with two
//! embedded parameters. Reads parse both out of the concrete URI and
//! forward to the core handler.

use serde::Deserialize;
use serde_json::{json, Value};

use reader_common::{ReaderError, Result};
use reader_core::Session;

/// URI template the documents resource is advertised under.
pub const DOCUMENTS_URI_TEMPLATE: &str = "reader://documents/location={location};after={after}";

const DOCUMENTS_URI_PREFIX: &str = "reader://documents/";

/// Resource templates exposed to the host.
pub fn list_templates() -> Value {
    json!({
        "resourceTemplates": [
            {
                "uriTemplate": DOCUMENTS_URI_TEMPLATE,
                "name": "List documents",
                "description": "List documents based on location (new, later, shortlist, archive, feed) and last modification time",
                "mimeType": "application/json"
            }
        ]
    })
}

/// Handle `resources/read` for a concrete documents URI.
pub async fn handle_read(session: &Session, params: Option<Value>) -> Result<Value> {
    #[derive(Deserialize)]
    struct ReadParams {
        uri: String,
    }

    let params: ReadParams = params
        .ok_or_else(|| ReaderError::ValidationError("Missing params".to_string()))
        .and_then(|v| {
            serde_json::from_value(v)
                .map_err(|e| ReaderError::ValidationError(format!("Invalid params: {}", e)))
        })?;

    let (location, after) = parse_documents_uri(&params.uri)?;
    let data = reader_core::list_documents(session, &location, &after).await?;

    Ok(json!({
        "contents": [
            {
                "uri": params.uri,
                "mimeType": "application/json",
                "text": data.to_string()
            }
        ]
    }))
}

/// Extract `location` and `after` from a concrete documents URI.
///
/// Expected form: `reader://documents/location=<value>;after=<value>`.
/// Both keys must be present; values are taken verbatim (validation is the
/// core handler's job).
fn parse_documents_uri(uri: &str) -> Result<(String, String)> {
    let rest = uri
        .strip_prefix(DOCUMENTS_URI_PREFIX)
        .ok_or_else(|| ReaderError::ValidationError(format!("Unsupported resource URI: {}", uri)))?;

    let mut location = None;
    let mut after = None;

    for pair in rest.split(';') {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            ReaderError::ValidationError(format!("Malformed URI parameter: {}", pair))
        })?;
        match key {
            "location" => location = Some(value.to_string()),
            "after" => after = Some(value.to_string()),
            other => {
                return Err(ReaderError::ValidationError(format!(
                    "Unknown URI parameter: {}",
                    other
                )))
            }
        }
    }

    match (location, after) {
        (Some(location), Some(after)) => Ok((location, after)),
        _ => Err(ReaderError::ValidationError(format!(
            "Resource URI must carry both location and after: {}",
            uri
        ))),
    }
}
