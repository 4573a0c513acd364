//! Fixed navigation bar.
use crate::commands::navigation::navigate;
use crate::constants::STAGGER_MS;
use folio_core::content;
use folio_core::constants::NAV_OPACITY_MIN;
use folio_core::navigation::{is_scrolled, nav_opacity, NavAction, NavState, Section};
use folio_ui::hooks::use_window_scroll;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavState::default);
    let opacity = use_state_eq(|| NAV_OPACITY_MIN);

    let onscroll = use_callback((), {
        let nav = nav.dispatcher();
        let opacity = opacity.setter();
        move |offset: f64, _| {
            nav.dispatch(NavAction::SetScrolled(is_scrolled(offset)));
            opacity.set(nav_opacity(offset));
        }
    });
    use_window_scroll(onscroll);

    let toggle_menu = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::ToggleMenu))
    };

    let link = |section: Section, class: Classes, delay_ms: u32, underline: bool| {
        let nav = nav.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| navigate(&section.anchor(), &nav));
        let style = format!("animation-delay: {delay_ms}ms;");

        html! {
            <button key={section.anchor()} {class} {style} {onclick}>
                { section.label() }
                if underline {
                    <span class={classes!(
                        "absolute", "-bottom-1", "left-0", "w-0", "h-0.5", "bg-gradient-to-r",
                        "from-cyan-400", "to-indigo-400", "group-hover:w-full", "transition-all", "duration-300"
                    )}></span>
                }
            </button>
        }
    };

    let desktop_links = Section::ALL
        .into_iter()
        .zip(0..)
        .map(|(section, i)| {
            link(
                section,
                classes!(
                    "text-slate-300", "hover:text-cyan-400", "transition-colors", "duration-300",
                    "relative", "group", "animate-fade-in"
                ),
                i * STAGGER_MS,
                true,
            )
        })
        .collect::<Html>();

    let mobile_links = Section::ALL
        .into_iter()
        .zip(0..)
        .map(|(section, i)| {
            link(
                section,
                classes!(
                    "block", "w-full", "text-left", "text-slate-300", "hover:text-cyan-400",
                    "hover:pl-4", "transition-all", "duration-300", "animate-fade-in"
                ),
                i * STAGGER_MS / 2,
                false,
            )
        })
        .collect::<Html>();

    let padding = if nav.scrolled { "py-4" } else { "py-6" };
    let menu_icon = if nav.menu_open {
        IconId::LucideX
    } else {
        IconId::LucideMenu
    };

    let style = format!("opacity: {}%;", *opacity);

    html! {
        <nav {style} class={classes!(
            "fixed", "top-0", "left-0", "right-0", "z-50", "transition-all", "duration-300", padding
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-6")}>
                <div class={classes!(
                    "relative", "backdrop-blur-xl", "bg-slate-900/60", "border", "border-slate-700/50",
                    "rounded-2xl", "shadow-2xl"
                )}>
                    <div class={classes!("px-6", "py-4")}>
                        <div class={classes!("flex", "items-center", "justify-between")}>
                            <div class={classes!("text-2xl", "font-bold", "font-heading", "animate-fade-in")}>
                                <span class={classes!(
                                    "bg-gradient-to-r", "from-cyan-400", "via-indigo-400", "to-purple-400",
                                    "bg-clip-text", "text-transparent"
                                )}>
                                    { content::profile().name }
                                </span>
                            </div>

                            <div class={classes!("hidden", "md:flex", "items-center", "gap-8")}>
                                { desktop_links }
                            </div>

                            <button
                                class={classes!("md:hidden", "text-slate-300", "hover:text-cyan-400", "transition-colors")}
                                aria-label="Toggle menu"
                                aria-expanded={nav.menu_open.to_string()}
                                onclick={toggle_menu}>

                                <Icon icon_id={menu_icon} width={"24"} height={"24"} />
                            </button>
                        </div>
                    </div>

                    if nav.menu_open {
                        <div class={classes!("md:hidden", "border-t", "border-slate-700/50", "animate-fade-in")}>
                            <div class={classes!("px-6", "py-4", "space-y-3")}>
                                { mobile_links }
                            </div>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}
