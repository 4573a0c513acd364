//! Project detail overlay state.
use crate::content::{self, Project, ProjectId};

/// Actions available to modify the [`ShowcaseState`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ShowcaseAction {
    /// Shows a project's details, replacing any shown project.
    Select(ProjectId),

    /// Hides the details.
    Dismiss,
}

/// Which project, if any, has its details shown.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct ShowcaseState {
    pub active: Option<ProjectId>,
}

impl ShowcaseState {
    /// Applies an action.
    ///
    /// # Returns
    /// Whether the state changed.
    pub fn apply(&mut self, action: ShowcaseAction) -> bool {
        let next = match action {
            ShowcaseAction::Select(id) => Some(id),
            ShowcaseAction::Dismiss => None,
        };

        std::mem::replace(&mut self.active, next) != next
    }

    /// The active project's content.
    pub fn active_project(&self) -> Option<&'static Project> {
        self.active.and_then(content::project)
    }
}

#[cfg(test)]
#[path = "./showcase_test.rs"]
mod showcase_test;
