//! Hero banner.
use super::SocialLinks;
use crate::commands::navigation::scroll_to;
use folio_core::content;
use folio_core::navigation::Section;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[function_component(Hero)]
pub fn hero() -> Html {
    let profile = content::profile();

    let contact_me = Callback::from(|_: MouseEvent| {
        scroll_to(&Section::Contact.anchor());
    });

    // staggered entrance
    let enter = |delay_ms: u32| format!("animation-delay: {delay_ms}ms;");

    html! {
        <section
            id={Section::Home.anchor()}
            class={classes!("min-h-screen", "flex", "items-center", "justify-center", "relative", "overflow-hidden", "pt-24")}>

            <div class={classes!("absolute", "inset-0", "bg-gradient-to-br", "from-slate-900", "via-slate-800", "to-slate-900")}>
                <div class={classes!("absolute", "inset-0", "opacity-30")}>
                    <div class={classes!("absolute", "top-20", "left-10", "w-72", "h-72", "bg-cyan-500", "rounded-full", "mix-blend-multiply", "filter", "blur-3xl", "animate-blob")}></div>
                    <div class={classes!("absolute", "top-40", "right-10", "w-72", "h-72", "bg-indigo-500", "rounded-full", "mix-blend-multiply", "filter", "blur-3xl", "animate-blob", "animation-delay-2000")}></div>
                    <div class={classes!("absolute", "bottom-20", "left-1/2", "w-72", "h-72", "bg-purple-500", "rounded-full", "mix-blend-multiply", "filter", "blur-3xl", "animate-blob", "animation-delay-4000")}></div>
                </div>
            </div>

            <div class={classes!("max-w-7xl", "mx-auto", "px-6", "relative", "z-10")}>
                <div class={classes!("grid", "lg:grid-cols-2", "gap-12", "items-center")}>
                    <div>
                        <div class={classes!("inline-block", "mb-4", "animate-fade-in")} style={enter(200)}>
                            <span class={classes!("px-4", "py-2", "rounded-full", "bg-cyan-500/10", "border", "border-cyan-500/30", "text-cyan-400", "text-sm", "font-medium")}>
                                { "Welcome to my portfolio" }
                            </span>
                        </div>

                        <h1 class={classes!("text-5xl", "md:text-7xl", "font-bold", "font-heading", "mb-6", "animate-fade-in")} style={enter(300)}>
                            <span class={classes!("text-white")}>{ "Hi, I'm" }</span>
                            <br />
                            <span class={classes!("bg-gradient-to-r", "from-cyan-400", "via-indigo-400", "to-purple-400", "bg-clip-text", "text-transparent")}>
                                { profile.name }
                            </span>
                        </h1>

                        <p class={classes!("text-xl", "md:text-2xl", "text-slate-300", "mb-4", "font-light", "animate-fade-in")} style={enter(400)}>
                            { profile.role }
                        </p>

                        <p class={classes!("text-slate-400", "text-lg", "mb-8", "leading-relaxed", "animate-fade-in")} style={enter(500)}>
                            { profile.tagline }
                        </p>

                        <div class={classes!("flex", "flex-wrap", "gap-4", "mb-8", "animate-fade-in")} style={enter(600)}>
                            <a
                                href={profile.cv_url}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!(
                                    "group", "px-8", "py-4", "bg-gradient-to-r", "from-cyan-500", "to-indigo-500", "rounded-xl",
                                    "font-medium", "text-white", "shadow-lg", "shadow-cyan-500/50", "hover:shadow-xl",
                                    "hover:shadow-cyan-500/70", "transition-all", "duration-300", "flex", "items-center", "gap-2"
                                )}>

                                <span class={classes!("group-hover:animate-bounce")}>
                                    <Icon icon_id={IconId::LucideDownload} width={"20"} height={"20"} />
                                </span>
                                { "Download CV" }
                            </a>
                            <button
                                onclick={contact_me}
                                class={classes!(
                                    "px-8", "py-4", "bg-slate-800", "border", "border-slate-700", "rounded-xl", "font-medium",
                                    "text-white", "hover:bg-slate-700", "transition-all", "duration-300", "flex", "items-center",
                                    "gap-2", "group"
                                )}>

                                { "Contact Me" }
                                <span class={classes!("group-hover:translate-x-1", "transition-transform")}>
                                    <Icon icon_id={IconId::LucideChevronRight} width={"20"} height={"20"} />
                                </span>
                            </button>
                        </div>

                        <div class={classes!("animate-fade-in")} style={enter(700)}>
                            <SocialLinks class={classes!("w-12", "h-12", "rounded-xl", "hover:shadow-lg", "hover:shadow-cyan-500/50")} />
                        </div>
                    </div>

                    <div class={classes!("relative", "animate-pop-in")} style={enter(200)}>
                        <div class={classes!("relative", "z-10")}>
                            <div class={classes!("relative", "animate-float")}>
                                <div class={classes!("absolute", "inset-0", "bg-gradient-to-r", "from-cyan-500", "to-indigo-500", "rounded-3xl", "blur-2xl", "opacity-30")}></div>
                                <img
                                    src={profile.avatar}
                                    alt={profile.name}
                                    class={classes!("relative", "rounded-3xl", "shadow-2xl", "border-4", "border-slate-700/50", "w-full", "h-auto")} />
                            </div>
                        </div>

                        <div class={classes!("absolute", "-top-10", "-right-10", "w-40", "h-40", "border-2", "border-cyan-500/20", "rounded-full", "animate-spin-slow")}></div>
                        <div class={classes!("absolute", "-bottom-10", "-left-10", "w-32", "h-32", "border-2", "border-indigo-500/20", "rounded-full", "animate-spin-reverse")}></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
