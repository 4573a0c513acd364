//! Animate content in when it is scrolled into view.
use crate::hooks::use_in_view;
use yew::prelude::*;

/// Where revealed content comes from.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,

    /// Grows from slightly smaller.
    Zoom,
}

impl RevealFrom {
    fn class(&self) -> &'static str {
        match self {
            Self::Below => "reveal-from-below",
            Self::Left => "reveal-from-left",
            Self::Right => "reveal-from-right",
            Self::Zoom => "reveal-zoom",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub from: RevealFrom,

    /// Delay before the transition starts, used to stagger lists.
    #[prop_or_default]
    pub delay_ms: u32,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they enter the viewport.
/// Transitions are defined by the `reveal*` classes in the site stylesheet.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let class = classes!(
        "reveal",
        props.from.class(),
        in_view.then_some("revealed"),
        props.class.clone()
    );

    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div ref={node} {class} {style}>
            { for props.children.iter() }
        </div>
    }
}
