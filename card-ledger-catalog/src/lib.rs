//! Reference-catalog collaborator: candidate types and the search client.
//!
//! The matching engine treats the catalog as an abstract source of
//! candidates; only frontends wire this concrete HTTP client to it.

pub mod client;
pub mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::{CardImages, CardSet, CatalogCard, SearchResponse};
