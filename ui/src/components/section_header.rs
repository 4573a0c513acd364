//! Section title.
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,

    /// Text below the title.
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("text-center", "mb-16")}>
            <h2 class={classes!("text-4xl", "md:text-5xl", "font-bold", "mb-4")}>
                <span class={classes!("bg-gradient-to-r", "from-cyan-400", "to-indigo-400", "bg-clip-text", "text-transparent")}>
                    { &props.title }
                </span>
            </h2>
            <div class={classes!("w-24", "h-1", "bg-gradient-to-r", "from-cyan-500", "to-indigo-500", "mx-auto", "rounded-full")}></div>
            if let Some(subtitle) = &props.subtitle {
                <p class={classes!("text-slate-400", "mt-6", "text-lg")}>{ subtitle }</p>
            }
        </div>
    }
}
