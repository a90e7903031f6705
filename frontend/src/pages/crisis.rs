use shared::PortalConfig;
use yew::prelude::*;

use crate::components::ChatPanel;
use crate::pages::Page;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct CrisisProps {
    pub on_navigate: Callback<Page>,
}

const WARNING_SIGNS: [&str; 5] = [
    "Thoughts of harming yourself or others",
    "Overwhelming anxiety or panic attacks",
    "Severe depression or hopelessness",
    "Trauma or crisis situations",
    "Substance abuse or addiction issues",
];

#[function_component(Crisis)]
pub fn crisis(props: &CrisisProps) -> Html {
    let config = PortalConfig::default();
    let chat_open = use_state(|| false);

    let open_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: MouseEvent| chat_open.set(true))
    };
    // Closing discards the transcript; reopening mounts a fresh panel.
    let close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: ()| {
            Logger::info_with_component("crisis", "Chat session ended");
            chat_open.set(false);
        })
    };

    let goto_appointments = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Appointments);
        })
    };

    html! {
        <div class="page crisis-page">
            <section class="section crisis-hero">
                <span class="crisis-badge">{"⚠️ Crisis Support"}</span>
                <h1>{"Immediate Support When You Need It Most"}</h1>
                <p class="crisis-hero-text">
                    {"If you're experiencing a crisis or need immediate support, our team \
                     is here to help 24/7."}
                </p>
                <div class="crisis-hero-actions">
                    <button class="btn btn-primary" onclick={open_chat.clone()}>
                        {"💬 Start Chat Now"}
                    </button>
                    <a href="tel:+18002738255" class="btn btn-secondary">
                        {"📞 Call Crisis Line"}
                    </a>
                </div>
            </section>

            <section class="section crisis-contacts">
                <div class="card-grid card-grid-2">
                    <div class="contact-card contact-card-emergency">
                        <h3>{"Emergency Contacts"}</h3>
                        <p class="contact-card-subtitle">
                            {"Immediate resources for crisis situations"}
                        </p>
                        <ul class="contact-list">
                            <li>
                                <p class="contact-name">{"National Suicide Prevention Lifeline"}</p>
                                <a href="tel:+18002738255" class="contact-value">
                                    {&config.crisis_line}
                                </a>
                                <p class="contact-note">{"Available 24/7, calls are confidential"}</p>
                            </li>
                            <li>
                                <p class="contact-name">{"Crisis Text Line"}</p>
                                <p class="contact-value">{"Text HOME to 741741"}</p>
                                <p class="contact-note">{"Available 24/7, free crisis support"}</p>
                            </li>
                            <li>
                                <p class="contact-name">{"Campus Security"}</p>
                                <a href="tel:+15551234567" class="contact-value">{"555-123-4567"}</a>
                                <p class="contact-note">{"On-campus emergency support"}</p>
                            </li>
                            <li>
                                <p class="contact-name">{"Emergency Services"}</p>
                                <a href="tel:911" class="contact-value">{"911"}</a>
                                <p class="contact-note">
                                    {"For immediate life-threatening emergencies"}
                                </p>
                            </li>
                        </ul>
                    </div>

                    <div class="contact-card contact-card-chat">
                        <h3>{"SafeSpace Chat Support"}</h3>
                        <p class="contact-card-subtitle">{"Connect with a Senior Tutor online"}</p>
                        <ul class="contact-list">
                            <li>
                                <p class="contact-name">{"24/7 Availability"}</p>
                                <p class="contact-note">
                                    {"Our Senior Tutors are available anytime, day or night"}
                                </p>
                            </li>
                            <li>
                                <p class="contact-name">{"Confidential Support"}</p>
                                <p class="contact-note">
                                    {"All conversations are private and secure"}
                                </p>
                            </li>
                            <li>
                                <p class="contact-name">{"Trained Staff"}</p>
                                <p class="contact-note">
                                    {"Our team consists of experienced Senior Tutors"}
                                </p>
                            </li>
                            <li>
                                <p class="contact-name">{"Follow-Up Support"}</p>
                                <p class="contact-note">
                                    {"We provide resources and follow-up care after your session"}
                                </p>
                            </li>
                        </ul>
                        <button class="btn btn-primary contact-card-cta" onclick={open_chat}>
                            {"Start Chat Support"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="section when-to-seek-help">
                <h2>{"When to Seek Help"}</h2>
                <div class="warning-panel">
                    <p>{"Consider reaching out if you're experiencing:"}</p>
                    <ul class="warning-list">
                        {for WARNING_SIGNS.iter().map(|sign| html! {
                            <li><span class="warning-icon">{"⚠️"}</span>{*sign}</li>
                        })}
                    </ul>
                    <p class="warning-footnote">
                        {"This is not an exhaustive list. If you're concerned about your \
                         mental health in any way, please don't hesitate to reach out for \
                         support."}
                    </p>
                </div>
            </section>

            <section class="section non-emergency">
                <div class="non-emergency-card">
                    <h2>{"Need Non-Emergency Support?"}</h2>
                    <p>
                        {"If you're not in immediate crisis but would like to talk to \
                         someone, consider scheduling an appointment with your Personal \
                         Supervisor."}
                    </p>
                    <div class="non-emergency-actions">
                        <a
                            href={Page::Appointments.hash()}
                            class="btn btn-primary"
                            onclick={goto_appointments}
                        >
                            {"Schedule Appointment"}
                        </a>
                        <a
                            href={format!("mailto:{}", config.support_email)}
                            class="btn btn-secondary"
                        >
                            {"✉️ Email Support"}
                        </a>
                    </div>
                </div>
            </section>

            {if *chat_open {
                html! { <ChatPanel on_close={close_chat} /> }
            } else { html! {} }}
        </div>
    }
}
