//! JSON parsing helper for vision model responses
//!
//! Models often wrap the JSON payload in extra prose. The helper extracts
//! the outermost object and deserializes it against the declared schema.

use tracing::debug;

use crate::error::{Error, Result};

use super::types::ExtractedExpense;

/// Parse an extraction payload from a model response
///
/// Any failure — no JSON object present, invalid JSON, missing required
/// fields — collapses to the same extraction error: the capability
/// produced no structured output. The raw response is logged at debug
/// level for diagnosis.
pub fn parse_expense_payload(response: &str) -> Result<ExtractedExpense> {
    let response = response.trim();

    // Look for JSON object
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &response[s..=e];
            serde_json::from_str(json_str).map_err(|err| {
                debug!("Unusable extraction JSON: {} | Raw: {}", err, truncate(json_str));
                Error::no_structured_output()
            })
        }
        _ => {
            debug!("No JSON found in extraction response | Raw: {}", truncate(response));
            Err(Error::no_structured_output())
        }
    }
}

/// Truncate long responses for log lines
fn truncate(s: &str) -> String {
    if s.len() > 200 {
        format!("{}...", &s[..200])
    } else {
        s.to_string()
    }
}
