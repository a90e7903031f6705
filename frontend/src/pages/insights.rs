use shared::MoodLevel;
use yew::prelude::*;

use crate::components::charts::{MoodTrendChart, StressChart};
use crate::components::MoodTracker;
use crate::pages::Page;
use crate::services::logging::Logger;
use crate::services::mock_data;

#[derive(Properties, PartialEq)]
pub struct InsightsProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Insights)]
pub fn insights(props: &InsightsProps) -> Html {
    let on_mood_select = Callback::from(|mood: String| {
        Logger::info_with_component("insights", &format!("Selected mood: {}", mood));
    });

    let goto_appointments = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Appointments);
        })
    };

    let distribution = mock_data::mood_distribution();
    let total: u32 = distribution.iter().map(|(_, count)| count).sum();

    html! {
        <div class="page insights-page">
            <section class="section insights-hero">
                <span class="page-badge">{"📊 Wellbeing Insights"}</span>
                <h1>{"Track Your Mental Wellbeing"}</h1>
                <p class="insights-hero-text">
                    {"Monitor your moods, stress levels, and emotional health over time to \
                     identify patterns and improve your overall wellbeing."}
                </p>
            </section>

            <section class="section insights-charts-row">
                <div class="insights-trend-column">
                    <MoodTrendChart data={mock_data::weekly_mood_counts()} />
                </div>
                <div class="insights-mood-column">
                    <div class="chart-card">
                        <div class="chart-card-header">
                            <div>
                                <h3 class="chart-card-title">{"Today's Mood"}</h3>
                                <p class="chart-card-subtitle">
                                    {"How are you feeling right now?"}
                                </p>
                            </div>
                        </div>
                        <MoodTracker on_mood_select={on_mood_select} />
                    </div>
                </div>
            </section>

            <section class="section insights-charts-row">
                <div class="chart-card">
                    <div class="chart-card-header">
                        <div>
                            <h3 class="chart-card-title">{"Mood Distribution"}</h3>
                            <p class="chart-card-subtitle">{"Your overall mood breakdown"}</p>
                        </div>
                    </div>
                    <div class="distribution-bars">
                        {for distribution.iter().map(|(level, count)| {
                            let percent = if total == 0 {
                                0.0
                            } else {
                                f64::from(*count) / f64::from(total) * 100.0
                            };
                            let (r, g, b) = level.rgb();
                            html! {
                                <div class="distribution-row">
                                    <span class="distribution-label">{level.label()}</span>
                                    <div class="distribution-track">
                                        <div
                                            class="distribution-fill"
                                            style={format!(
                                                "width: {:.0}%; background-color: rgb({}, {}, {});",
                                                percent, r, g, b
                                            )}
                                        ></div>
                                    </div>
                                    <span class="distribution-percent">
                                        {format!("{:.0}%", percent)}
                                    </span>
                                </div>
                            }
                        })}
                    </div>
                </div>

                <StressChart data={mock_data::stress_levels()} />
            </section>

            <section class="section recommendations-section">
                <h2>{"Personalized Recommendations"}</h2>
                <div class="card-grid card-grid-3">
                    <div class="recommendation-card recommendation-wellness">
                        <div class="recommendation-icon">{"🧠"}</div>
                        <h3>{"Stress Management"}</h3>
                        <p>
                            {"Based on your recent mood patterns, try these stress-reducing \
                             techniques:"}
                        </p>
                        <ul>
                            <li>{"10-minute guided meditation"}</li>
                            <li>{"Deep breathing exercises"}</li>
                            <li>{"Progressive muscle relaxation"}</li>
                        </ul>
                    </div>
                    <div class="recommendation-card recommendation-mint">
                        <div class="recommendation-icon">{"💗"}</div>
                        <h3>{"Self-Care Activities"}</h3>
                        <p>{"Try incorporating these activities into your routine:"}</p>
                        <ul>
                            <li>{"30 minutes of physical activity"}</li>
                            <li>{"Journaling before bed"}</li>
                            <li>{"Connect with a friend or family member"}</li>
                        </ul>
                    </div>
                    <div class="recommendation-card recommendation-calm">
                        <div class="recommendation-icon">{"📖"}</div>
                        <h3>{"Educational Resources"}</h3>
                        <p>{"Learn more about managing your mental health:"}</p>
                        <ul>
                            <li>{"Understanding anxiety triggers"}</li>
                            <li>{"Building resilience skills"}</li>
                            <li>{"Healthy sleep habits guide"}</li>
                        </ul>
                    </div>
                </div>
            </section>

            <section class="section insights-cta">
                <div class="insights-cta-card">
                    <h3>{"Need professional support?"}</h3>
                    <p>
                        {"Our trained counselors are here to help you navigate your mental \
                         health journey."}
                    </p>
                    <a
                        href={Page::Appointments.hash()}
                        class="btn btn-primary"
                        onclick={goto_appointments}
                    >
                        {"Book a Counseling Session"}
                    </a>
                </div>
            </section>
        </div>
    }
}
