//! Skills section.
use crate::constants::{SKILL_STAGGER_MS, STAGGER_MS};
use folio_core::content::{self, SkillCategory};
use folio_core::navigation::Section;
use folio_ui::components::{ContentIcon, ProgressBar, Reveal, RevealFrom, SectionHeader};
use yew::prelude::*;

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id={Section::Skills.anchor()} class={classes!("py-20", "bg-slate-900")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <Reveal>
                    <SectionHeader title="Skills & Technologies" />
                </Reveal>

                <div class={classes!("grid", "md:grid-cols-3", "gap-8")}>
                    { for content::skill_categories().iter().zip(0..).map(|(category, idx): (_, u32)| html! {
                        <Reveal key={category.title} delay_ms={idx * STAGGER_MS}>
                            <CategoryCard {category} delay_ms={idx * STAGGER_MS} />
                        </Reveal>
                    }) }
                </div>

                <Reveal class={classes!("mt-12")} delay_ms={3 * STAGGER_MS}>
                    <div class={classes!(
                        "bg-gradient-to-br", "from-slate-800/60", "to-slate-900/60", "backdrop-blur-sm", "border",
                        "border-slate-700/50", "rounded-2xl", "p-8", "shadow-xl"
                    )}>
                        <h3 class={classes!("text-xl", "font-bold", "text-white", "mb-6", "text-center")}>
                            { "Additional Technologies" }
                        </h3>
                        <div class={classes!("flex", "flex-wrap", "justify-center", "gap-3")}>
                            { for content::additional_technologies().iter().zip(0..).map(|(tech, idx): (_, u32)| html! {
                                <Reveal key={*tech} from={RevealFrom::Zoom} delay_ms={idx * SKILL_STAGGER_MS}>
                                    <span class={classes!(
                                        "pop", "inline-block", "px-6", "py-3", "bg-slate-800", "border", "border-slate-700",
                                        "rounded-xl", "text-slate-300", "hover:text-cyan-400", "hover:border-cyan-500",
                                        "transition-all", "duration-300", "cursor-default"
                                    )}>
                                        { *tech }
                                    </span>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CategoryCardProps {
    category: &'static SkillCategory,

    /// Delay of the card, skills are staggered after it.
    delay_ms: u32,
}

#[function_component(CategoryCard)]
fn category_card(props: &CategoryCardProps) -> Html {
    let category = props.category;

    html! {
        <div class={classes!(
            "h-full", "bg-gradient-to-br", "from-slate-800/80", "to-slate-900/80", "backdrop-blur-sm", "border",
            "border-slate-700/50", "rounded-2xl", "p-8", "shadow-xl", "hover:border-cyan-500/50",
            "transition-all", "duration-300"
        )}>
            <div class={classes!("flex", "items-center", "gap-4", "mb-6")}>
                <div class={classes!(
                    "w-14", "h-14", "rounded-xl", "bg-gradient-to-br", category.accent, "flex", "items-center",
                    "justify-center", "text-white"
                )}>
                    <ContentIcon icon={category.icon} />
                </div>
                <h3 class={classes!("text-2xl", "font-bold", "text-white")}>{ category.title }</h3>
            </div>

            <div class={classes!("space-y-4")}>
                { for category.skills.iter().zip(0..).map(|(skill, idx): (_, u32)| {
                    let delay_ms = props.delay_ms + idx * SKILL_STAGGER_MS;
                    html! {
                        <Reveal key={skill.name} from={RevealFrom::Left} {delay_ms}>
                            <div class={classes!("flex", "justify-between", "items-center", "mb-2")}>
                                <span class={classes!("text-slate-300", "font-medium")}>{ skill.name }</span>
                                <span class={classes!("text-cyan-400", "text-sm", "font-semibold")}>
                                    { format!("{}%", skill.level()) }
                                </span>
                            </div>
                            <ProgressBar level={skill.level()} class={classes!(category.accent)} {delay_ms} />
                        </Reveal>
                    }
                }) }
            </div>
        </div>
    }
}
