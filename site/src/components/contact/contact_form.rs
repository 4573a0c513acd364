//! Contact form.
use crate::app::SiteConfigContext;
use crate::commands::contact::send_contact;
use folio_core::contact::{ContactAction, ContactState, Field, SubmissionStatus};
use folio_ui::components::TextField;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Presentation of a field's control.
struct Control {
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    rows: Option<u32>,
}

fn control(field: Field) -> Control {
    match field {
        Field::Name => Control {
            label: "Your Name",
            input_type: "text",
            placeholder: "John Doe",
            rows: None,
        },

        Field::Email => Control {
            label: "Your Email",
            input_type: "email",
            placeholder: "john@example.com",
            rows: None,
        },

        Field::Subject => Control {
            label: "Subject",
            input_type: "text",
            placeholder: "Project Inquiry",
            rows: None,
        },

        Field::Message => Control {
            label: "Message",
            input_type: "text",
            placeholder: "Tell me about your project...",
            rows: Some(5),
        },
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_reducer(ContactState::default);
    let config = use_context::<SiteConfigContext>().flatten();

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !state.can_submit() {
                return;
            }

            let attempt = state.next_attempt();
            let form = state.form.clone();
            state.dispatch(ContactAction::Submit);
            send_contact(config.clone(), form, attempt, state.dispatcher());
        })
    };

    let sending = state.status.is_sending();
    let fields = Field::ALL.into_iter().map(|field| {
        let control = control(field);
        let oninput = {
            let state = state.dispatcher();
            Callback::from(move |value: String| state.dispatch(ContactAction::SetField(field, value)))
        };

        html! {
            <TextField
                key={field.name()}
                name={field.name()}
                label={control.label}
                value={state.form.get(field).to_string()}
                input_type={control.input_type}
                placeholder={control.placeholder}
                rows={control.rows}
                disabled={sending}
                {oninput} />
        }
    });

    html! {
        <form
            {onsubmit}
            class={classes!(
                "bg-gradient-to-br", "from-slate-800/80", "to-slate-900/80", "backdrop-blur-sm", "border",
                "border-slate-700/50", "rounded-2xl", "p-8", "shadow-xl"
            )}>

            <div class={classes!("space-y-6")}>
                { for fields }

                <button
                    type="submit"
                    disabled={sending}
                    class={classes!(
                        "group", "w-full", "px-8", "py-4", "bg-gradient-to-r", "from-cyan-500", "to-indigo-500",
                        "rounded-xl", "font-medium", "text-white", "shadow-lg", "shadow-cyan-500/50", "hover:shadow-xl",
                        "hover:shadow-cyan-500/70", "transition-all", "duration-300", "disabled:opacity-50",
                        "disabled:cursor-not-allowed", "flex", "items-center", "justify-center", "gap-2"
                    )}>

                    if sending {
                        <div class={classes!("w-5", "h-5", "border-2", "border-white", "border-t-transparent", "rounded-full", "animate-spin")}></div>
                        { "Sending..." }
                    } else {
                        { "Send Message" }
                        <span class={classes!("group-hover:translate-x-1", "group-hover:-translate-y-1", "transition-transform")}>
                            <Icon icon_id={IconId::LucideSend} width={"20"} height={"20"} />
                        </span>
                    }
                </button>

                <StatusBanner status={state.status} />
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct StatusBannerProps {
    status: SubmissionStatus,
}

#[function_component(StatusBanner)]
fn status_banner(props: &StatusBannerProps) -> Html {
    let Some(message) = props.status.user_message() else {
        return Html::default();
    };

    let class = match props.status {
        SubmissionStatus::Success => classes!("bg-green-500/20", "border-green-500/50", "text-green-400"),
        _ => classes!("bg-red-500/20", "border-red-500/50", "text-red-400"),
    };

    html! {
        <div
            class={classes!("animate-fade-in", "p-4", "border", "rounded-xl", "text-center", class)}
            role="status"
            aria-live="polite">

            { message }
        </div>
    }
}
