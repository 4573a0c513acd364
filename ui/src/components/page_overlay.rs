//! Modal panel over the page.
use crate::hooks::use_key_down;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(PartialEq, Properties)]
pub struct PageOverlayProps {
    /// Classes of the panel.
    #[prop_or_default]
    pub class: Classes,

    /// Displayed beside the close button.
    #[prop_or_default]
    pub title: Option<AttrValue>,

    #[prop_or_default]
    pub children: Children,

    /// Called when the overlay should be dismissed:
    /// close button, click outside the panel, or `Escape`.
    #[prop_or(Callback::noop())]
    pub onclose: Callback<()>,
}

/// Fixed overlay covering the viewport with a centered panel.
///
/// Clicks inside the panel do not reach the backdrop.
#[function_component(PageOverlay)]
pub fn page_overlay(props: &PageOverlayProps) -> Html {
    use_key_down("Escape", props.onclose.clone());

    let onclose = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| {
            onclose.emit(());
        })
    };

    let stop_propagation = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let class = classes!(
        "folio-ui-page-overlay",
        "bg-gradient-to-br",
        "from-slate-800",
        "to-slate-900",
        "border",
        "border-slate-700",
        "rounded-2xl",
        "p-8",
        "max-w-3xl",
        "w-full",
        "max-h-[90vh]",
        "overflow-y-auto",
        props.class.clone()
    );

    html! {
        <div class={classes!(
                "folio-ui-page-overlay-backdrop",
                "fixed", "inset-0", "bg-black/80", "backdrop-blur-sm", "z-50",
                "flex", "items-center", "justify-center", "p-6"
            )}
            onclick={onclose.clone()}>

            <div {class} role="dialog" aria-modal="true" onclick={stop_propagation}>
                <div class={classes!("flex", "justify-between", "items-start", "mb-6")}>
                    <h3 class={classes!("text-3xl", "font-bold", "text-white")}>
                        { props.title.clone().unwrap_or_default() }
                    </h3>
                    <button
                        class={classes!("page-overlay-close", "text-slate-400", "hover:text-white", "transition-colors")}
                        aria-label="Close"
                        onclick={onclose}>

                        <Icon icon_id={IconId::LucideX} width={"24"} height={"24"} />
                    </button>
                </div>

                <div class={classes!("page-overlay-content")}>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
