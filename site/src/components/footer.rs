//! Page footer.
use super::SocialLinks;
use folio_core::content;
use folio_ui::dom;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let profile = content::profile();
    let year = use_memo((), |_| dom::current_year());

    html! {
        <footer class={classes!("bg-slate-900", "border-t", "border-slate-800")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6", "py-12")}>
                <div class={classes!("flex", "flex-col", "md:flex-row", "justify-between", "items-center", "gap-6")}>
                    <div class={classes!("text-center", "md:text-left")}>
                        <h3 class={classes!(
                            "text-2xl", "font-bold", "bg-gradient-to-r", "from-cyan-400", "to-indigo-400",
                            "bg-clip-text", "text-transparent", "mb-2"
                        )}>
                            { profile.name }
                        </h3>
                        <p class={classes!("text-slate-400")}>{ profile.role }</p>
                    </div>

                    <SocialLinks class={classes!("w-10", "h-10", "rounded-lg")} icon_size={18} />
                </div>

                <div class={classes!("mt-8", "pt-8", "border-t", "border-slate-800", "text-center", "text-slate-400")}>
                    <p>{ format!("© {} {}. All rights reserved.", *year, profile.name) }</p>
                    <p class={classes!("mt-2", "text-sm")}>{ "Built with Rust, Yew, and Tailwind CSS" }</p>
                </div>
            </div>
        </footer>
    }
}
