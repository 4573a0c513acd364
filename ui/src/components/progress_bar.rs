//! Proficiency bar.
use crate::hooks::use_in_view;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Fill percentage, clamped to 100.
    pub level: u8,

    /// Classes of the filled portion, e.g. its gradient.
    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub delay_ms: u32,
}

/// Bar that fills to `level` once scrolled into view.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let width = if in_view { props.level.min(100) } else { 0 };
    let style = format!(
        "width: {width}%; transition: width 1s ease-out {}ms;",
        props.delay_ms
    );

    html! {
        <div ref={node}
            class={classes!("h-2", "bg-slate-700/50", "rounded-full", "overflow-hidden")}
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={props.level.min(100).to_string()}>

            <div
                class={classes!("h-full", "bg-gradient-to-r", "rounded-full", props.class.clone())}
                {style}>
            </div>
        </div>
    }
}
