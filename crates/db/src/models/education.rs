//! Education model.

use folio_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `education` table.
///
/// `gpa` is stored as `NUMERIC(3,2)` and read back as `float8`, so it
/// serializes as a JSON number.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Education {
    pub id: DbId,
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub current: bool,
    pub description: Option<String>,
    pub gpa: Option<f64>,
}

/// DTO for creating an education entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEducation {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub gpa: Option<f64>,
}
