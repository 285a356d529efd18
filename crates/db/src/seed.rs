//! First-run seed data.
//!
//! [`seed_if_empty`] writes the owner account and the starter portfolio the
//! first time the service boots against an empty database. Everything is
//! written in one transaction: either the whole seed lands or nothing does.

use chrono::NaiveDate;
use folio_core::skills::{clamp_proficiency, SKILL_TYPE_TECH, SKILL_TYPE_TOOL};
use folio_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::education::CreateEducation;
use crate::models::experience::CreateExperience;
use crate::models::profile::CreateProfile;
use crate::models::skill::CreateSkill;
use crate::models::user::CreateUser;
use crate::repositories::{EducationRepo, ExperienceRepo, ProfileRepo, SkillRepo, UserRepo};

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Whether the owner user and profile were created.
    pub owner_created: bool,
    pub skills: usize,
    pub experiences: usize,
    pub education: usize,
}

impl SeedReport {
    /// True when the run found existing data and wrote nothing.
    pub fn is_noop(&self) -> bool {
        *self == SeedReport::default()
    }
}

/// `(name, skill_type, icon, proficiency)` for every seeded skill.
const SEED_SKILLS: &[(&str, &str, &str, i32)] = &[
    ("Python", SKILL_TYPE_TECH, "🐍", 85),
    ("React", SKILL_TYPE_TECH, "⚛️", 75),
    ("Node.js", SKILL_TYPE_TECH, "🟢", 80),
    ("Flask", SKILL_TYPE_TECH, "🌶️", 85),
    ("HTML5", SKILL_TYPE_TECH, "📄", 90),
    ("CSS3", SKILL_TYPE_TECH, "🎨", 85),
    ("JavaScript", SKILL_TYPE_TECH, "📜", 80),
    ("TypeScript", SKILL_TYPE_TECH, "📘", 75),
    ("Penetration Testing", SKILL_TYPE_TECH, "🔒", 85),
    ("Web Security", SKILL_TYPE_TECH, "🛡️", 90),
    ("Cloud Security", SKILL_TYPE_TECH, "☁️", 80),
    ("SQL", SKILL_TYPE_TECH, "💾", 75),
    ("Burp Suite", SKILL_TYPE_TOOL, "🛠️", 90),
    ("Nmap", SKILL_TYPE_TOOL, "🔍", 85),
    ("Wireshark", SKILL_TYPE_TOOL, "📡", 80),
    ("Metasploit", SKILL_TYPE_TOOL, "💣", 75),
    ("Kali Linux", SKILL_TYPE_TOOL, "🐉", 85),
    ("Grafana", SKILL_TYPE_TOOL, "📊", 70),
    ("Git", SKILL_TYPE_TOOL, "🔀", 85),
    ("Docker", SKILL_TYPE_TOOL, "🐳", 75),
    ("AWS", SKILL_TYPE_TOOL, "☁️", 80),
    ("Jenkins", SKILL_TYPE_TOOL, "🤖", 70),
];

/// Skill names applied in the first seeded experience.
const APPSEC_SKILLS: &[&str] = &[
    "Python",
    "Penetration Testing",
    "Web Security",
    "Cloud Security",
    "Burp Suite",
    "Nmap",
    "AWS",
];

/// Skill names applied in the second seeded experience.
const INTERN_SKILLS: &[&str] = &["Python", "Nmap", "Wireshark", "Metasploit", "Kali Linux"];

/// Seed the owner and starter content if the corresponding tables are empty.
///
/// - No user yet: create the owner and their profile.
/// - No skill yet: create skills, experiences (with skill links) and education.
///
/// Safe to call on every startup.
pub async fn seed_if_empty(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    if UserRepo::first(&mut *tx).await?.is_none() {
        seed_owner(&mut tx).await?;
        report.owner_created = true;
    }

    if SkillRepo::count(&mut *tx).await? == 0 {
        let skill_ids = seed_skills(&mut tx).await?;
        report.skills = skill_ids.len();
        report.experiences = seed_experiences(&mut tx, &skill_ids).await?;
        report.education = seed_education(&mut tx).await?;
    }

    tx.commit().await?;

    if report.is_noop() {
        tracing::debug!("Seed data already present, nothing written");
    } else {
        tracing::info!(
            owner_created = report.owner_created,
            skills = report.skills,
            experiences = report.experiences,
            education = report.education,
            "Seed data written",
        );
    }

    Ok(report)
}

async fn seed_owner(tx: &mut Transaction<'_, Postgres>) -> Result<(), sqlx::Error> {
    let user = UserRepo::create(
        &mut **tx,
        &CreateUser {
            username: "tuananh".to_string(),
            email: "tuananh@example.com".to_string(),
            first_name: Some("Tuan".to_string()),
            last_name: Some("Anh".to_string()),
        },
    )
    .await?;

    ProfileRepo::create(
        &mut **tx,
        &CreateProfile {
            user_id: user.id,
            avatar: None,
            bio: Some(
                "Information security engineer passionate about web application \
                 and cloud security."
                    .to_string(),
            ),
            location: Some("Vietnam".to_string()),
            birth_date: None,
            website: Some("https://github.com/Tuan-Anh-IT".to_string()),
            phone: None,
        },
    )
    .await?;

    Ok(())
}

/// Insert every seed skill, returning `(name, id)` pairs in insertion order.
async fn seed_skills(
    tx: &mut Transaction<'_, Postgres>,
) -> Result<Vec<(&'static str, DbId)>, sqlx::Error> {
    let mut ids = Vec::with_capacity(SEED_SKILLS.len());
    for &(name, skill_type, icon, proficiency) in SEED_SKILLS {
        let skill = SkillRepo::create(
            &mut **tx,
            &CreateSkill {
                name: name.to_string(),
                skill_type: skill_type.to_string(),
                proficiency: Some(clamp_proficiency(proficiency)),
                description: None,
                icon: Some(icon.to_string()),
            },
        )
        .await?;
        ids.push((name, skill.id));
    }
    Ok(ids)
}

fn skill_ids_for(names: &[&str], skill_ids: &[(&str, DbId)]) -> Vec<DbId> {
    names
        .iter()
        .filter_map(|name| {
            skill_ids
                .iter()
                .find(|(seeded, _)| seeded == name)
                .map(|&(_, id)| id)
        })
        .collect()
}

async fn seed_experiences(
    tx: &mut Transaction<'_, Postgres>,
    skill_ids: &[(&str, DbId)],
) -> Result<usize, sqlx::Error> {
    let experiences = [
        CreateExperience {
            title: "AppSec Engineer".to_string(),
            company: "ABC Company".to_string(),
            location: Some("Hanoi, Vietnam".to_string()),
            start_date: date(2023, 1, 1),
            end_date: Some(date(2024, 12, 31)),
            current: Some(false),
            description: "Performed penetration testing for web and mobile applications. \
                          Built tooling to automate vulnerability scanning. Helped design \
                          and roll out security controls for cloud systems."
                .to_string(),
            skill_ids: skill_ids_for(APPSEC_SKILLS, skill_ids),
        },
        CreateExperience {
            title: "Security Intern".to_string(),
            company: "XYZ Company".to_string(),
            location: Some("Ho Chi Minh City, Vietnam".to_string()),
            start_date: date(2022, 6, 1),
            end_date: Some(date(2022, 12, 31)),
            current: Some(false),
            description: "Supported the security team with malware analysis and incident \
                          investigation while learning current security techniques."
                .to_string(),
            skill_ids: skill_ids_for(INTERN_SKILLS, skill_ids),
        },
    ];

    for experience in &experiences {
        ExperienceRepo::create_in(tx, experience).await?;
    }
    Ok(experiences.len())
}

async fn seed_education(tx: &mut Transaction<'_, Postgres>) -> Result<usize, sqlx::Error> {
    let entries = [
        CreateEducation {
            degree: "Bachelor of Information Security".to_string(),
            institution: "Hanoi University of Science and Technology".to_string(),
            field_of_study: "Information Security".to_string(),
            start_date: date(2019, 9, 1),
            end_date: Some(date(2023, 6, 30)),
            current: Some(false),
            description: Some(
                "Graduated with GPA 3.5/4.0, focusing on web application security, \
                 penetration testing and incident response."
                    .to_string(),
            ),
            gpa: Some(3.5),
        },
        CreateEducation {
            degree: "CCNA Security Certificate".to_string(),
            institution: "Cisco Networking Academy".to_string(),
            field_of_study: "Network Security".to_string(),
            start_date: date(2022, 1, 1),
            end_date: Some(date(2022, 6, 30)),
            current: Some(false),
            description: Some(
                "Completed the CCNA Security course with a focus on network security \
                 and firewall configuration."
                    .to_string(),
            ),
            gpa: None,
        },
        CreateEducation {
            degree: "Ethical Hacking Course".to_string(),
            institution: "Cybrary".to_string(),
            field_of_study: "Penetration Testing".to_string(),
            start_date: date(2023, 3, 1),
            end_date: Some(date(2023, 8, 31)),
            current: Some(false),
            description: Some(
                "Advanced ethical hacking covering web and network penetration testing \
                 and exploit development."
                    .to_string(),
            ),
            gpa: None,
        },
    ];

    for entry in &entries {
        EducationRepo::create(&mut **tx, entry).await?;
    }
    Ok(entries.len())
}

/// Build a calendar date from seed literals. The literals are all valid, so
/// an impossible date falls back to the Unix epoch rather than panicking.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
