//! Page sections.
pub mod about;
pub mod contact;
pub mod education;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod social_links;

// Re-exports
pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
pub use social_links::SocialLinks;
