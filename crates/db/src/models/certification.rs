//! Certification model.

use folio_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `certifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certification {
    pub id: DbId,
    pub name: String,
    pub issuer: String,
    pub issue_date: Date,
    pub expiry_date: Option<Date>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// DTO for creating a certification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCertification {
    pub name: String,
    pub issuer: String,
    pub issue_date: Date,
    pub expiry_date: Option<Date>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}
