//! Skill categories and the grouping used by the grouped-skills view.

use serde::{Deserialize, Serialize};

/// Value stored in `skills.skill_type` for technical skills.
pub const SKILL_TYPE_TECH: &str = "tech";
/// Value stored in `skills.skill_type` for soft skills.
pub const SKILL_TYPE_SOFT: &str = "soft";
/// Value stored in `skills.skill_type` for tools.
pub const SKILL_TYPE_TOOL: &str = "tool";
/// Value stored in `skills.skill_type` for spoken languages.
pub const SKILL_TYPE_LANG: &str = "lang";

/// Lowest meaningful proficiency score.
pub const MIN_PROFICIENCY: i32 = 0;
/// Highest meaningful proficiency score.
pub const MAX_PROFICIENCY: i32 = 100;

/// The four skill categories a skill row can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Tech,
    Soft,
    Tool,
    Lang,
}

impl SkillType {
    /// Every category, in the order the grouped view lists them.
    pub const ALL: [SkillType; 4] = [
        SkillType::Tech,
        SkillType::Soft,
        SkillType::Tool,
        SkillType::Lang,
    ];

    /// The string stored in the database for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            SkillType::Tech => SKILL_TYPE_TECH,
            SkillType::Soft => SKILL_TYPE_SOFT,
            SkillType::Tool => SKILL_TYPE_TOOL,
            SkillType::Lang => SKILL_TYPE_LANG,
        }
    }

    /// Parse a stored value. Matching is exact (case-sensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            SKILL_TYPE_TECH => Some(SkillType::Tech),
            SKILL_TYPE_SOFT => Some(SkillType::Soft),
            SKILL_TYPE_TOOL => Some(SkillType::Tool),
            SKILL_TYPE_LANG => Some(SkillType::Lang),
            _ => None,
        }
    }
}

/// Clamp a proficiency score into `[MIN_PROFICIENCY, MAX_PROFICIENCY]`.
///
/// The store does not enforce the range; writers call this before inserting.
pub fn clamp_proficiency(value: i32) -> i32 {
    value.clamp(MIN_PROFICIENCY, MAX_PROFICIENCY)
}
