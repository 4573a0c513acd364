//! Education timeline.
use crate::constants::STAGGER_MS;
use folio_core::content;
use folio_core::navigation::Section;
use folio_ui::components::{ContentIcon, Reveal, RevealFrom, SectionHeader};
use yew::prelude::*;

#[function_component(Education)]
pub fn education() -> Html {
    let entries = content::education();

    html! {
        <section id={Section::Education.anchor()} class={classes!("py-20", "bg-slate-900/50")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <Reveal>
                    <SectionHeader title="Education" />
                </Reveal>

                <div class={classes!("max-w-4xl", "mx-auto", "space-y-8")}>
                    { for entries.iter().zip(0..).map(|(entry, idx): (_, u32)| {
                        let from = if idx % 2 == 0 { RevealFrom::Left } else { RevealFrom::Right };
                        let has_next = (idx as usize) + 1 < entries.len();

                        html! {
                            <Reveal key={entry.degree} {from} delay_ms={idx * STAGGER_MS} class={classes!("relative")}>
                                <div class={classes!(
                                    "bg-gradient-to-br", "from-slate-800/80", "to-slate-900/80", "backdrop-blur-sm",
                                    "border", "border-slate-700/50", "rounded-2xl", "p-8", "shadow-xl",
                                    "hover:border-cyan-500/50", "hover:shadow-2xl", "hover:shadow-cyan-500/10",
                                    "transition-all", "duration-300"
                                )}>
                                    <div class={classes!("flex", "items-start", "gap-6")}>
                                        <div class={classes!("flex-shrink-0")}>
                                            <div class={classes!(
                                                "w-16", "h-16", "rounded-xl", "bg-gradient-to-br", "from-cyan-500",
                                                "to-indigo-500", "flex", "items-center", "justify-center", "text-white"
                                            )}>
                                                <ContentIcon icon={entry.icon} size={28} />
                                            </div>
                                        </div>
                                        <div class={classes!("flex-1")}>
                                            <h3 class={classes!("text-2xl", "font-bold", "text-white", "mb-2")}>{ entry.degree }</h3>
                                            <p class={classes!("text-cyan-400", "font-medium", "mb-1")}>{ entry.institution }</p>
                                            <p class={classes!("text-slate-400", "text-sm", "mb-4")}>{ entry.period }</p>
                                            <p class={classes!("text-slate-300", "leading-relaxed")}>{ entry.description }</p>
                                        </div>
                                    </div>
                                </div>

                                if has_next {
                                    <div class={classes!(
                                        "absolute", "left-1/2", "transform", "-translate-x-1/2", "w-0.5", "h-8",
                                        "bg-gradient-to-b", "from-cyan-500", "to-indigo-500", "-bottom-8", "hidden", "md:block"
                                    )}></div>
                                }
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
