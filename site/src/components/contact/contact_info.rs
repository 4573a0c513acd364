//! Direct contact channels.
use crate::constants::STAGGER_MS;
use folio_core::content;
use folio_ui::components::{ContentIcon, Reveal, RevealFrom};
use yew::prelude::*;

const CARD_CLASSES: &[&str] = &[
    "bg-gradient-to-br",
    "from-slate-800/80",
    "to-slate-900/80",
    "backdrop-blur-sm",
    "border",
    "border-slate-700/50",
    "rounded-2xl",
    "p-8",
    "shadow-xl",
];

#[function_component(ContactInfo)]
pub fn contact_info() -> Html {
    html! {
        <div class={classes!("space-y-8")}>
            <div class={classes!(CARD_CLASSES.to_vec())}>
                <h3 class={classes!("text-2xl", "font-bold", "text-white", "mb-6")}>{ "Contact Information" }</h3>
                <div class={classes!("space-y-6")}>
                    { for content::contact_channels().iter().zip(0..).map(|(channel, idx): (_, u32)| html! {
                        <Reveal key={channel.label} from={RevealFrom::Left} delay_ms={idx * STAGGER_MS}>
                            <a
                                href={channel.href}
                                class={classes!(
                                    "flex", "items-center", "gap-4", "group", "hover:translate-x-2",
                                    "transition-transform", "duration-300"
                                )}>

                                <div class={classes!(
                                    "w-12", "h-12", "rounded-xl", "bg-gradient-to-br", "from-cyan-500", "to-indigo-500",
                                    "flex", "items-center", "justify-center", "group-hover:scale-110",
                                    "transition-transform", "duration-300", "text-white"
                                )}>
                                    <ContentIcon icon={channel.icon} size={20} />
                                </div>
                                <div>
                                    <p class={classes!("text-slate-400", "text-sm")}>{ channel.label }</p>
                                    <p class={classes!("text-white", "font-medium", "group-hover:text-cyan-400", "transition-colors")}>
                                        { channel.value }
                                    </p>
                                </div>
                            </a>
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class={classes!(CARD_CLASSES.to_vec())}>
                <h3 class={classes!("text-2xl", "font-bold", "text-white", "mb-4")}>{ "Let's Connect!" }</h3>
                <p class={classes!("text-slate-300", "leading-relaxed", "mb-6")}>
                    { "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision. \
                       Feel free to reach out through any of the channels above, or send me a message using the contact form." }
                </p>
                <p class={classes!("text-slate-400", "italic")}>
                    { "\"The best way to predict the future is to create it.\" - Let's create something amazing together!" }
                </p>
            </div>
        </div>
    }
}
