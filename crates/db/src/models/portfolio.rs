//! The aggregate portfolio snapshot.

use serde::Serialize;

use super::achievement::Achievement;
use super::blog_post::BlogPostWithAuthor;
use super::certification::Certification;
use super::education::Education;
use super::experience::ExperienceWithSkills;
use super::profile::ProfileWithUser;
use super::project::ProjectWithTechnologies;
use super::skill::Skill;

/// Everything the landing page needs, read in one request.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    /// The first profile by id, or `null` when none exists.
    pub profile: Option<ProfileWithUser>,
    pub skills: Vec<Skill>,
    /// Featured projects only.
    pub projects: Vec<ProjectWithTechnologies>,
    pub experiences: Vec<ExperienceWithSkills>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    /// The most recent published posts, capped at `AGGREGATE_POST_LIMIT`.
    pub blog_posts: Vec<BlogPostWithAuthor>,
}
