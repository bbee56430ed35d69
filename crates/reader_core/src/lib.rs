//! Core Reader API access
//!
//! Holds the authenticated session, the list-parameter validator, and the
//! document-list handler that fronts the Reader `/list/` endpoint.

pub mod documents;
pub mod params;
pub mod session;

pub use documents::list_documents;
pub use session::Session;
