//! About section.
use crate::constants::STAGGER_MS;
use folio_core::content;
use folio_core::navigation::Section;
use folio_ui::components::{ContentIcon, Reveal, RevealFrom, SectionHeader};
use yew::prelude::*;

static JOURNEY: [&str; 3] = [
    "My programming journey began with curiosity and evolved into a passionate career in web development. \
     I started learning HTML and CSS, fascinated by how code transforms into beautiful interfaces that \
     people interact with every day.",
    "As I dove deeper, I fell in love with JavaScript and React, discovering the power of creating \
     dynamic, responsive applications. Each project teaches me something new, and I thrive on solving \
     complex problems with elegant solutions.",
    "Today, I specialize in building modern web applications with React, TypeScript, and Next.js, \
     focusing on performance, accessibility, and user experience. I believe great code should be both \
     functional and beautiful.",
];

static BEYOND_CODING: [&str; 3] = [
    "When I'm not immersed in code, I find balance through sports and creative pursuits. Physical \
     activity keeps my mind sharp and helps me approach problems with fresh perspectives.",
    "I'm also passionate about painting, which surprisingly complements my work as a developer. Both \
     require attention to detail, color theory, composition, and the ability to bring abstract ideas \
     to life.",
    "These hobbies remind me that creativity exists everywhere, and the best solutions often come when \
     you step away from the screen and let your mind wander.",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.anchor()} class={classes!("py-20", "bg-slate-900/50")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <Reveal>
                    <SectionHeader title="About Me" />
                </Reveal>

                <div class={classes!("grid", "lg:grid-cols-2", "gap-12", "mb-16")}>
                    <Reveal from={RevealFrom::Left}>
                        <Narrative title="My Journey" paragraphs={JOURNEY.as_slice()} />
                    </Reveal>
                    <Reveal from={RevealFrom::Right}>
                        <Narrative title="Beyond Coding" paragraphs={BEYOND_CODING.as_slice()} />
                    </Reveal>
                </div>

                <div class={classes!("grid", "md:grid-cols-3", "gap-6")}>
                    { for content::features().iter().zip(0..).map(|(feature, idx): (_, u32)| html! {
                        <Reveal key={feature.title} delay_ms={idx * STAGGER_MS}>
                            <div class={classes!(
                                "lift", "group", "h-full", "bg-gradient-to-br", "from-slate-800/60", "to-slate-900/60",
                                "backdrop-blur-sm", "border", "border-slate-700/50", "rounded-2xl", "p-8", "shadow-xl",
                                "hover:border-cyan-500/50", "hover:shadow-2xl", "hover:shadow-cyan-500/20",
                                "transition-all", "duration-300"
                            )}>
                                <div class={classes!(
                                    "w-16", "h-16", "rounded-xl", "bg-gradient-to-br", "from-cyan-500", "to-indigo-500",
                                    "flex", "items-center", "justify-center", "mb-6", "group-hover:scale-110",
                                    "transition-transform", "duration-300", "text-white"
                                )}>
                                    <ContentIcon icon={feature.icon} size={28} />
                                </div>
                                <h3 class={classes!("text-xl", "font-bold", "text-white", "mb-3")}>{ feature.title }</h3>
                                <p class={classes!("text-slate-400", "leading-relaxed")}>{ feature.description }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct NarrativeProps {
    title: AttrValue,
    paragraphs: &'static [&'static str],
}

#[function_component(Narrative)]
fn narrative(props: &NarrativeProps) -> Html {
    html! {
        <div class={classes!(
            "h-full", "bg-gradient-to-br", "from-slate-800/80", "to-slate-900/80", "backdrop-blur-sm",
            "border", "border-slate-700/50", "rounded-2xl", "p-8", "shadow-xl"
        )}>
            <h3 class={classes!("text-2xl", "font-bold", "text-white", "mb-6")}>{ &props.title }</h3>
            <div class={classes!("space-y-4", "text-slate-300", "leading-relaxed")}>
                { for props.paragraphs.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
            </div>
        </div>
    }
}
