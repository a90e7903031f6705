use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResourceCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub link_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
}

#[function_component(ResourceCard)]
pub fn resource_card(props: &ResourceCardProps) -> Html {
    let onclick = props.on_click.clone().map(|cb| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    });

    html! {
        <div class="resource-card">
            <div class="resource-card-icon">{props.icon.clone()}</div>
            <h3 class="resource-card-title">{props.title.clone()}</h3>
            <p class="resource-card-description">{props.description.clone()}</p>
            {match (&props.link_label, onclick) {
                (Some(label), Some(onclick)) => html! {
                    <a href="#" class="resource-card-link" {onclick}>{label.clone()}{" →"}</a>
                },
                _ => html! {},
            }}
        </div>
    }
}
