//! Project preview card.
use folio_core::constants::CARD_TECH_PREVIEW;
use folio_core::content::{Project, ProjectId};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,

    /// Details were requested.
    pub onselect: Callback<ProjectId>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let (preview, hidden) = project.tech_preview(CARD_TECH_PREVIEW);

    let view_details = {
        let onselect = props.onselect.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| onselect.emit(id))
    };

    html! {
        <div class={classes!(
            "lift", "group", "h-full", "bg-gradient-to-br", "from-slate-800/80", "to-slate-900/80",
            "backdrop-blur-sm", "border", "border-slate-700/50", "rounded-2xl", "overflow-hidden", "shadow-xl",
            "hover:border-cyan-500/50", "hover:shadow-2xl", "hover:shadow-cyan-500/20", "transition-all", "duration-300"
        )}>
            <div class={classes!("relative", "overflow-hidden")}>
                <img
                    src={project.image}
                    alt={project.title}
                    loading="lazy"
                    class={classes!("w-full", "h-48", "object-cover", "group-hover:scale-110", "transition-transform", "duration-500")} />
                <div class={classes!("absolute", "inset-0", "bg-gradient-to-t", "from-slate-900", "to-transparent", "opacity-60")}></div>
            </div>

            <div class={classes!("p-6")}>
                <h3 class={classes!("text-2xl", "font-bold", "text-white", "mb-3", "group-hover:text-cyan-400", "transition-colors")}>
                    { project.title }
                </h3>
                <p class={classes!("text-slate-400", "mb-4", "leading-relaxed", "line-clamp-3")}>
                    { project.description }
                </p>

                <div class={classes!("flex", "flex-wrap", "gap-2", "mb-6")}>
                    { for preview.iter().map(|tech| html! {
                        <span key={*tech} class={classes!("px-3", "py-1", "bg-slate-700/50", "border", "border-slate-600", "rounded-lg", "text-xs", "text-slate-300")}>
                            { *tech }
                        </span>
                    }) }
                    if hidden > 0 {
                        <span class={classes!("px-3", "py-1", "bg-slate-700/50", "border", "border-slate-600", "rounded-lg", "text-xs", "text-cyan-400")}>
                            { format!("+{hidden} more") }
                        </span>
                    }
                </div>

                <div class={classes!("flex", "gap-3")}>
                    <a
                        href={project.live_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!(
                            "flex-1", "px-4", "py-2", "bg-gradient-to-r", "from-cyan-500", "to-indigo-500", "rounded-lg",
                            "text-white", "text-center", "font-medium", "hover:shadow-lg", "hover:shadow-cyan-500/50",
                            "transition-all", "duration-300", "flex", "items-center", "justify-center", "gap-2"
                        )}>

                        <Icon icon_id={IconId::LucideExternalLink} width={"16"} height={"16"} />
                        { "View Live" }
                    </a>
                    <a
                        href={project.source_url}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!(
                            "flex-1", "px-4", "py-2", "bg-slate-700", "border", "border-slate-600", "rounded-lg",
                            "text-white", "text-center", "font-medium", "hover:bg-slate-600", "transition-all",
                            "duration-300", "flex", "items-center", "justify-center", "gap-2"
                        )}>

                        <Icon icon_id={IconId::LucideGithub} width={"16"} height={"16"} />
                        { "GitHub" }
                    </a>
                </div>

                <button
                    type="button"
                    onclick={view_details}
                    class={classes!(
                        "w-full", "mt-3", "px-4", "py-2", "bg-slate-800/50", "border", "border-slate-700", "rounded-lg",
                        "text-slate-300", "text-center", "text-sm", "font-medium", "hover:bg-slate-700",
                        "hover:text-cyan-400", "transition-all", "duration-300"
                    )}>

                    { "View Details" }
                </button>
            </div>
        </div>
    }
}
