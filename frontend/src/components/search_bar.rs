use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub placeholder: AttrValue,
    /// Fired with the trimmed query when the form is submitted.
    pub on_search: Callback<String>,
    /// Fired when the user clears an active search.
    pub on_clear: Callback<()>,
}

/// Free-text search form. Submit is disabled while the input is blank,
/// and a clear button appears once a search has been applied.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let query = use_state(String::new);
    let applied = use_state(|| false);

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_submit = {
        let query = query.clone();
        let applied = applied.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = query.trim().to_string();
            if trimmed.is_empty() {
                return;
            }
            applied.set(true);
            on_search.emit(trimmed);
        })
    };

    let on_clear = {
        let query = query.clone();
        let applied = applied.clone();
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(String::new());
            applied.set(false);
            on_clear.emit(());
        })
    };

    let blank = query.trim().is_empty();

    html! {
        <form class="search-bar" onsubmit={on_submit}>
            <input
                type="text"
                class="search-input"
                placeholder={props.placeholder.clone()}
                value={(*query).clone()}
                oninput={on_input}
            />
            {if *applied {
                html! {
                    <button type="button" class="btn search-clear-btn" onclick={on_clear}>
                        {"Clear"}
                    </button>
                }
            } else { html! {} }}
            <button type="submit" class="btn btn-primary search-submit-btn" disabled={blank}>
                {"Search"}
            </button>
        </form>
    }
}
