//! Query-string parameters for the list endpoints.
//!
//! The query string is taken as raw key/value pairs and the first value of a
//! repeated key wins, so no query string is ever rejected. Values are kept as
//! strings and interpreted by `folio_core::query`.

/// Raw `(key, value)` pairs as produced by `Query<Vec<(String, String)>>`.
pub type QueryPairs = Vec<(String, String)>;

/// The first value given for `key`, if any.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// `GET /api/skills/?type=`
#[derive(Debug, Default)]
pub struct SkillListParams {
    pub skill_type: Option<String>,
}

impl SkillListParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            skill_type: first_value(pairs, "type").map(str::to_string),
        }
    }
}

/// `GET /api/projects/?featured=`
#[derive(Debug, Default)]
pub struct ProjectListParams {
    pub featured: Option<String>,
}

impl ProjectListParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            featured: first_value(pairs, "featured").map(str::to_string),
        }
    }
}
