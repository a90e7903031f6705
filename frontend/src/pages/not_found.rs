use yew::prelude::*;

use crate::pages::Page;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    use_effect_with((), |_| {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Logger::error_with_component(
            "not-found",
            &format!("404: attempted to access non-existent route: {}", hash),
        );
        || ()
    });

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
        })
    };

    html! {
        <div class="page not-found-page">
            <div class="not-found-card">
                <div class="not-found-icon">{"⚠️"}</div>
                <h1>{"Page Not Found"}</h1>
                <p>
                    {"We couldn't find the page you were looking for. It might have been \
                     moved, deleted, or never existed."}
                </p>
                <a href={Page::Home.hash()} class="btn btn-primary" onclick={go_home}>
                    {"← Return to Home"}
                </a>
            </div>
        </div>
    }
}
