//! Static content of the portfolio.
//!
//! All content is bundled at build time; nothing here is fetched or mutated.
pub mod data;
pub mod types;

// Re-exports
pub use data::{
    additional_technologies, contact_channels, education, features, profile, project, projects,
    skill_categories, social_links,
};
pub use types::{
    ContactChannel, EducationEntry, Feature, Icon, Profile, Project, ProjectId, Skill,
    SkillCategory, SocialLink,
};

#[cfg(test)]
#[path = "./mod_test.rs"]
mod mod_test;
