//! Domain vocabulary shared by the store and the HTTP layer.
//!
//! Everything here is pure: no database, no HTTP. The `folio-db` crate maps
//! these types onto rows and the `folio-api` crate maps them onto responses.

pub mod blog;
pub mod contact;
pub mod error;
pub mod query;
pub mod skills;
pub mod types;
