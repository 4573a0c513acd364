//! Main application.
use crate::components::{About, Contact, Education, Footer, Hero, Navbar, Projects, Skills};
use crate::constants::APP_ID;
use folio_core::SiteConfig;
use std::rc::Rc;
use yew::prelude::*;

/// Site configuration shared with the sections that need it.
pub type SiteConfigContext = Option<Rc<SiteConfig>>;

/// Page root.
/// Mounts every section in page order.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());

    html! {
        <ContextProvider<SiteConfigContext> context={(*config).clone()}>
            <div id={APP_ID} class={classes!("bg-slate-900", "text-white", "min-h-screen", "font-sans")}>
                <Navbar />
                <main>
                    <Hero />
                    <About />
                    <Skills />
                    <Education />
                    <Projects />
                    <Contact />
                </main>
                <Footer />
            </div>
        </ContextProvider<SiteConfigContext>>
    }
}

fn load_config() -> SiteConfigContext {
    match SiteConfig::from_build_env() {
        Ok(config) => {
            if config.is_placeholder() {
                tracing::warn!(
                    endpoint = %config.intake_endpoint,
                    "form intake endpoint is a placeholder, set `FOLIO_INTAKE_ENDPOINT` when building"
                );
            }

            Some(Rc::new(config))
        }

        Err(err) => {
            tracing::error!(?err, "invalid site configuration");
            None
        }
    }
}
