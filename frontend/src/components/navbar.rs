use yew::prelude::*;

use crate::hooks::use_scrolled;
use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current_page: Page,
    pub on_navigate: Callback<Page>,
}

/// Top navigation bar. Switches to a compact style once the window has
/// scrolled, and collapses into a hamburger menu on small screens.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_scrolled();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        let is_active = page == props.current_page;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(page);
        });
        html! {
            <a
                href={page.hash()}
                class={classes!("nav-link", is_active.then_some("nav-link-active"))}
                {onclick}
            >
                {page.title()}
            </a>
        }
    };

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
        })
    };

    html! {
        <header class={classes!("navbar", scrolled.then_some("navbar-scrolled"))}>
            <nav class="navbar-inner">
                <a href={Page::Home.hash()} class="navbar-brand" onclick={go_home}>
                    <span class="navbar-logo">{"💙"}</span>
                    <span class="navbar-title">{"SafeSpace"}</span>
                </a>

                <div class="navbar-links">
                    {for Page::nav_items().into_iter().map(|page| nav_link(page))}
                </div>

                <button
                    class="navbar-menu-toggle"
                    aria-label="Toggle navigation menu"
                    onclick={toggle_menu}
                >
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </nav>

            {if *menu_open {
                html! {
                    <div class="navbar-mobile-menu">
                        {for Page::nav_items().into_iter().map(|page| nav_link(page))}
                    </div>
                }
            } else { html! {} }}
        </header>
    }
}
