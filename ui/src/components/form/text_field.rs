//! Labeled text input.
use yew::prelude::*;

const CONTROL_CLASSES: &[&str] = &[
    "w-full",
    "px-4",
    "py-3",
    "bg-slate-900/50",
    "border",
    "border-slate-700",
    "rounded-xl",
    "text-white",
    "placeholder-slate-500",
    "focus:outline-none",
    "focus:border-cyan-500",
    "focus:ring-2",
    "focus:ring-cyan-500/20",
    "transition-all",
    "duration-300",
];

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    /// Html `name` and `id` of the control.
    pub name: AttrValue,

    pub label: AttrValue,

    /// Controlled value.
    pub value: AttrValue,

    /// Type of the input element.
    /// Ignored for multiline fields.
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,

    #[prop_or_default]
    pub placeholder: Option<AttrValue>,

    /// Render a `textarea` with this many rows.
    #[prop_or_default]
    pub rows: Option<u32>,

    #[prop_or(true)]
    pub required: bool,

    #[prop_or_default]
    pub disabled: bool,

    /// Called with the control's value on every edit.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Label and controlled input or textarea.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput_text = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<web_sys::HtmlInputElement>();
            oninput.emit(input.value());
        })
    };

    let oninput_area = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area = e.target_unchecked_into::<web_sys::HtmlTextAreaElement>();
            oninput.emit(area.value());
        })
    };

    let control = match props.rows {
        Some(rows) => html! {
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                class={classes!(CONTROL_CLASSES.to_vec(), "resize-none")}
                rows={rows.to_string()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                disabled={props.disabled}
                value={props.value.clone()}
                oninput={oninput_area} />
        },

        None => html! {
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                class={classes!(CONTROL_CLASSES.to_vec())}
                placeholder={props.placeholder.clone()}
                required={props.required}
                disabled={props.disabled}
                value={props.value.clone()}
                oninput={oninput_text} />
        },
    };

    html! {
        <div class={classes!("folio-ui-text-field")}>
            <label for={props.name.clone()} class={classes!("block", "text-slate-300", "mb-2", "font-medium")}>
                { &props.label }
            </label>
            { control }
        </div>
    }
}
