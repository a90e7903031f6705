use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::footer::Footer;
use components::navbar::Navbar;
use pages::{Appointments, Crisis, Home, Insights, NotFound, Page};
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    // Initial page comes from the URL hash so deep links (and bad links,
    // which land on the 404 page) keep working without a router.
    let page = use_state(Page::from_location);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| {
            target.push_to_location();
            Logger::debug_with_component("app", &format!("Navigating to {}", target.title()));
            page.set(target);
        })
    };

    html! {
        <>
            <Navbar current_page={*page} on_navigate={on_navigate.clone()} />
            <main class="main">
                {match *page {
                    Page::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
                    Page::Crisis => html! { <Crisis on_navigate={on_navigate.clone()} /> },
                    Page::Appointments => html! { <Appointments /> },
                    Page::Insights => html! { <Insights on_navigate={on_navigate.clone()} /> },
                    Page::NotFound => html! { <NotFound on_navigate={on_navigate.clone()} /> },
                }}
            </main>
            <Footer on_navigate={on_navigate} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
