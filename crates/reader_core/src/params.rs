//! List-parameter validation
//!
//! Sanitizes the two free-form filter inputs into an API-safe query
//! mapping. Invalid values are dropped with a warning, never an error: an
//! upstream caller that supplies nothing usable gets an unfiltered list.

use std::collections::HashMap;

use tracing::warn;

/// Locations (folders) recognized by the Reader API.
pub const VALID_LOCATIONS: [&str; 5] = ["new", "later", "shortlist", "archive", "feed"];

/// Validate and filter list-documents parameters.
///
/// `location` is accepted only on an exact, case-sensitive match against
/// [`VALID_LOCATIONS`]. `after` is accepted on a syntactic ISO 8601 check:
/// it must contain `T` and either end with `Z` or contain `+`. This is
/// deliberately not a full date parse; accepted values pass through
/// unmodified.
pub fn validate_list_params(location: &str, after: &str) -> HashMap<&'static str, String> {
    let mut params = HashMap::new();

    if VALID_LOCATIONS.contains(&location) {
        params.insert("location", location.to_string());
    } else {
        warn!("Invalid location: {}, parameter will be ignored", location);
    }

    if after.contains('T') && (after.ends_with('Z') || after.contains('+')) {
        params.insert("updatedAfter", after.to_string());
    } else {
        warn!(
            "Invalid ISO 8601 datetime: {}, parameter will be ignored",
            after
        );
    }

    params
}
