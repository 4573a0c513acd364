//! Content types.
use std::fmt;

/// Icons referenced by content.
///
/// Kept independent of any icon set so the content can be rendered by any front end.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Facebook,
    Mail,
    Phone,
    Code,
    Zap,
    BookOpen,
    Layers,
    Database,
    Wrench,
    GraduationCap,
    Award,
}

// *****************
// *** ProjectId ***
// *****************

/// Identifies a [`Project`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ***************
// *** Project ***
// ***************

/// A showcased project.
#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,

    /// Url of the cover image.
    pub image: &'static str,

    pub live_url: &'static str,
    pub source_url: &'static str,

    /// Technologies used, most significant first.
    pub tech_stack: &'static [&'static str],

    pub challenges: &'static str,
    pub future_plans: &'static str,
}

impl Project {
    /// Splits the tech stack for a compact preview.
    ///
    /// # Returns
    /// The first `limit` technologies and the number left out.
    pub fn tech_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = limit.min(self.tech_stack.len());
        (&self.tech_stack[..shown], self.tech_stack.len() - shown)
    }
}

// **************
// *** Skills ***
// **************

/// A skill and self-assessed proficiency.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Skill {
    pub name: &'static str,

    /// Proficiency percentage.
    /// Display only.
    pub level: u8,
}

impl Skill {
    /// Proficiency clamped to a displayable percentage.
    pub fn level(&self) -> u8 {
        self.level.min(100)
    }
}

/// Group of related skills.
#[derive(Clone, PartialEq, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,

    /// Gradient classes used for the category's badge and bars.
    pub accent: &'static str,

    pub skills: &'static [Skill],
}

// *****************
// *** Education ***
// *****************

#[derive(Clone, PartialEq, Debug)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

// ************
// *** Misc ***
// ************

/// Highlight shown in the about section.
#[derive(Clone, PartialEq, Debug)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub url: &'static str,
}

/// Direct way to reach the author.
#[derive(Clone, PartialEq, Debug)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

/// Who the portfolio is about.
#[derive(Clone, PartialEq, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub avatar: &'static str,

    /// Link to the downloadable CV.
    pub cv_url: &'static str,
}
