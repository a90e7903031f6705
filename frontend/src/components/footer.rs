use shared::PortalConfig;
use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let config = PortalConfig::default();

    let footer_link = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        html! {
            <li>
                <a href={page.hash()} class="footer-link" {onclick}>{page.title()}</a>
            </li>
        }
    };

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-section">
                    <h3 class="footer-heading">{"SafeSpace"}</h3>
                    <p class="footer-tagline">
                        {"A supportive space for students to check in, reach out, and look after their wellbeing."}
                    </p>
                </div>

                <div class="footer-section">
                    <h4 class="footer-heading">{"Quick Links"}</h4>
                    <ul class="footer-links">
                        {for Page::nav_items().into_iter().map(footer_link)}
                    </ul>
                </div>

                <div class="footer-section">
                    <h4 class="footer-heading">{"Get Help Now"}</h4>
                    <ul class="footer-links">
                        <li>
                            <span class="footer-contact">{"Crisis line: "}{&config.crisis_line}</span>
                        </li>
                        <li>
                            <a class="footer-link" href={format!("mailto:{}", config.support_email)}>
                                {&config.support_email}
                            </a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{"© 2023 SafeSpace Student Wellness. All rights reserved."}</p>
            </div>
        </footer>
    }
}
