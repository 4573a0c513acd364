//! Contact section.
mod contact_form;
mod contact_info;

use contact_form::ContactForm;
use contact_info::ContactInfo;
use folio_core::navigation::Section;
use folio_ui::components::{Reveal, RevealFrom, SectionHeader};
use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.anchor()} class={classes!("py-20", "bg-slate-900/50")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <Reveal>
                    <SectionHeader
                        title="Get In Touch"
                        subtitle="Have a project in mind? Let's work together to create something amazing!" />
                </Reveal>

                <div class={classes!("grid", "lg:grid-cols-2", "gap-12")}>
                    <Reveal from={RevealFrom::Left}>
                        <ContactInfo />
                    </Reveal>
                    <Reveal from={RevealFrom::Right}>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
