//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct whose serialized form is the
//!   shape returned by the API
//! - Where the entity embeds related rows, an `XWithY` wrapper that flattens
//!   the entity and adds the related records one level deep
//! - A `Deserialize` create DTO used by seeding and fixtures

pub mod achievement;
pub mod blog_post;
pub mod certification;
pub mod contact;
pub mod education;
pub mod experience;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod skill;
pub mod user;
