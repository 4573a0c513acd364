//! Projects section.
mod project_card;
mod project_details;

use crate::constants::STAGGER_MS;
use folio_core::content::{self, ProjectId};
use folio_core::navigation::Section;
use folio_core::showcase::{ShowcaseAction, ShowcaseState};
use folio_ui::components::{Reveal, SectionHeader};
use project_card::ProjectCard;
use project_details::ProjectDetails;
use yew::prelude::*;

#[function_component(Projects)]
pub fn projects() -> Html {
    let showcase = use_reducer(ShowcaseState::default);

    let select = use_callback((), {
        let showcase = showcase.dispatcher();
        move |id: ProjectId, _| {
            tracing::debug!(%id, "showing project details");
            showcase.dispatch(ShowcaseAction::Select(id));
        }
    });

    let dismiss = use_callback((), {
        let showcase = showcase.dispatcher();
        move |_: (), _| {
            tracing::debug!("dismissing project details");
            showcase.dispatch(ShowcaseAction::Dismiss);
        }
    });

    html! {
        <section id={Section::Projects.anchor()} class={classes!("py-20", "bg-slate-900")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <Reveal>
                    <SectionHeader title="Featured Projects" />
                </Reveal>

                <div class={classes!("grid", "md:grid-cols-2", "lg:grid-cols-3", "gap-8")}>
                    { for content::projects().iter().zip(0..).map(|(project, idx): (_, u32)| html! {
                        <Reveal key={project.id} delay_ms={idx * STAGGER_MS}>
                            <ProjectCard {project} onselect={select.clone()} />
                        </Reveal>
                    }) }
                </div>
            </div>

            if let Some(project) = showcase.active_project() {
                <ProjectDetails {project} onclose={dismiss} />
            }
        </section>
    }
}
