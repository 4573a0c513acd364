//! [`yew`] implementations for content.
use crate::content::ProjectId;
use yew::virtual_dom::Key;

impl From<ProjectId> for Key {
    fn from(id: ProjectId) -> Self {
        id.0.into()
    }
}
