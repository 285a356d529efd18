pub mod achievement;
pub mod blog;
pub mod certification;
pub mod contact;
pub mod education;
pub mod experience;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod skill;
