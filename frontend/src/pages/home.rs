use yew::prelude::*;

use crate::components::{MoodTracker, ResourceCard};
use crate::pages::Page;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let on_mood_select = Callback::from(|mood: String| {
        Logger::info_with_component("home", &format!("Selected progress level: {}", mood));
    });

    let goto = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(page))
    };
    let goto_click = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        })
    };

    html! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero-inner">
                    <div class="hero-copy">
                        <h1 class="hero-title">
                            {"Your Academic Progress"}
                            <span class="hero-title-accent">{"Matters"}</span>
                        </h1>
                        <p class="hero-text">
                            {"SafeSpace provides accessible resources and support for your \
                             academic wellbeing. Report your progress, schedule appointments \
                             with your Personal Supervisor, or track your journey, all in \
                             one place."}
                        </p>
                        <div class="hero-actions">
                            <a
                                href={Page::Crisis.hash()}
                                class="btn btn-primary"
                                onclick={goto_click(Page::Crisis)}
                            >
                                {"Get Support Now"}
                            </a>
                            <a
                                href={Page::Appointments.hash()}
                                class="btn btn-secondary"
                                onclick={goto_click(Page::Appointments)}
                            >
                                {"Book Appointment"}
                            </a>
                        </div>
                    </div>
                    <div class="hero-card">
                        <h3 class="hero-card-title">
                            {"How are you progressing with your studies?"}
                        </h3>
                        <MoodTracker on_mood_select={on_mood_select} />
                    </div>
                </div>
            </section>

            <section class="section services-section">
                <div class="section-heading">
                    <h2>{"Our Services"}</h2>
                    <p>
                        {"From immediate support to long-term progress tracking, we're here \
                         to help you thrive academically."}
                    </p>
                </div>
                <div class="card-grid card-grid-3">
                    <ResourceCard
                        icon="🛡️"
                        title="Academic Support"
                        description="Access resources and support for your academic journey."
                        link_label="Get Help"
                        on_click={goto(Page::Crisis)}
                    />
                    <ResourceCard
                        icon="📅"
                        title="Supervisor Meetings"
                        description="Schedule appointments with your Personal Supervisor."
                        link_label="Book Now"
                        on_click={goto(Page::Appointments)}
                    />
                    <ResourceCard
                        icon="📊"
                        title="Progress Tracking"
                        description="Track your academic progress and get personalized recommendations."
                        link_label="View Insights"
                        on_click={goto(Page::Insights)}
                    />
                </div>
            </section>

            <section class="section resources-section">
                <div class="section-heading">
                    <h2>{"Academic Resources"}</h2>
                    <p>
                        {"Educational materials and self-help tools to support your academic \
                         journey."}
                    </p>
                </div>
                <div class="card-grid card-grid-4">
                    <ResourceCard
                        icon="📖"
                        title="Study Guides"
                        description="Practical strategies for managing coursework, studying effectively, and more."
                    />
                    <ResourceCard
                        icon="🎧"
                        title="Focus Sessions"
                        description="Guided focus sessions to help improve concentration and reduce study anxiety."
                    />
                    <ResourceCard
                        icon="💗"
                        title="Wellbeing Tips"
                        description="Simple daily practices to improve your wellbeing during academic stress."
                    />
                    <ResourceCard
                        icon="💬"
                        title="Peer Support"
                        description="Connect with other students who understand what you're going through."
                    />
                </div>
            </section>

            <section class="section cta-section">
                <div class="cta-card">
                    <h2>{"Need to speak with a Senior Tutor?"}</h2>
                    <p>
                        {"Our support team is available to assist you during difficult times. \
                         Don't hesitate to reach out."}
                    </p>
                    <div class="cta-actions">
                        <a href="tel:+18002738255" class="btn btn-outline">
                            {"📞 Call Support Line"}
                        </a>
                        <a
                            href={Page::Crisis.hash()}
                            class="btn btn-outline"
                            onclick={goto_click(Page::Crisis)}
                        >
                            {"💬 Chat with Support"}
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
