//! Social profile links.
use folio_core::content;
use folio_ui::components::ContentIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    /// Classes of each link.
    #[prop_or_default]
    pub class: Classes,

    #[prop_or(20)]
    pub icon_size: u32,
}

#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <div class={classes!("flex", "gap-4")}>
            { for content::social_links().iter().map(|social| html! {
                <a
                    key={social.url}
                    href={social.url}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={social.label}
                    class={classes!(
                        "pop", "flex", "items-center", "justify-center", "bg-slate-800", "border",
                        "border-slate-700", "text-slate-400", "hover:text-cyan-400", "hover:border-cyan-500",
                        "transition-all", "duration-300", props.class.clone()
                    )}>

                    <ContentIcon icon={social.icon} size={props.icon_size} />
                </a>
            }) }
        </div>
    }
}
