//! Full project details.
use folio_core::content::Project;
use folio_ui::components::PageOverlay;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsProps {
    pub project: &'static Project,
    pub onclose: Callback<()>,
}

#[function_component(ProjectDetails)]
pub fn project_details(props: &ProjectDetailsProps) -> Html {
    let project = props.project;

    html! {
        <PageOverlay title={project.title} onclose={props.onclose.clone()} class={classes!("animate-pop-in")}>
            <img
                src={project.image}
                alt={project.title}
                class={classes!("w-full", "h-64", "object-cover", "rounded-xl", "mb-6")} />

            <div class={classes!("space-y-6")}>
                <DetailBlock heading="Description">
                    <p class={classes!("text-slate-300", "leading-relaxed")}>{ project.description }</p>
                </DetailBlock>

                <DetailBlock heading="Tech Stack">
                    <div class={classes!("flex", "flex-wrap", "gap-2")}>
                        { for project.tech_stack.iter().map(|tech| html! {
                            <span key={*tech} class={classes!("px-4", "py-2", "bg-slate-700/50", "border", "border-slate-600", "rounded-lg", "text-slate-300")}>
                                { *tech }
                            </span>
                        }) }
                    </div>
                </DetailBlock>

                <DetailBlock heading="Challenges Faced">
                    <p class={classes!("text-slate-300", "leading-relaxed")}>{ project.challenges }</p>
                </DetailBlock>

                <DetailBlock heading="Future Plans">
                    <p class={classes!("text-slate-300", "leading-relaxed")}>{ project.future_plans }</p>
                </DetailBlock>

                <div class={classes!("flex", "gap-4", "pt-4")}>
                    <a
                        href={project.live_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!(
                            "flex-1", "px-6", "py-3", "bg-gradient-to-r", "from-cyan-500", "to-indigo-500", "rounded-xl",
                            "text-white", "text-center", "font-medium", "hover:shadow-lg", "hover:shadow-cyan-500/50",
                            "transition-all", "duration-300", "flex", "items-center", "justify-center", "gap-2"
                        )}>

                        <Icon icon_id={IconId::LucideExternalLink} width={"18"} height={"18"} />
                        { "Visit Live Site" }
                    </a>
                    <a
                        href={project.source_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!(
                            "flex-1", "px-6", "py-3", "bg-slate-700", "border", "border-slate-600", "rounded-xl",
                            "text-white", "text-center", "font-medium", "hover:bg-slate-600", "transition-all",
                            "duration-300", "flex", "items-center", "justify-center", "gap-2"
                        )}>

                        <Icon icon_id={IconId::LucideGithub} width={"18"} height={"18"} />
                        { "View Code" }
                    </a>
                </div>
            </div>
        </PageOverlay>
    }
}

#[derive(Properties, PartialEq)]
struct DetailBlockProps {
    heading: AttrValue,

    #[prop_or_default]
    children: Html,
}

#[function_component(DetailBlock)]
fn detail_block(props: &DetailBlockProps) -> Html {
    html! {
        <div>
            <h4 class={classes!("text-xl", "font-bold", "text-cyan-400", "mb-3")}>{ &props.heading }</h4>
            { props.children.clone() }
        </div>
    }
}
