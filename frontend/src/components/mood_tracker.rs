use gloo::timers::future::TimeoutFuture;
use shared::{MoodFlow, MoodLevel, PortalConfig};
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct MoodTrackerProps {
    /// Fired once per submission with the chosen level's value string.
    #[prop_or_default]
    pub on_mood_select: Option<Callback<String>>,
}

pub enum Msg {
    Select(MoodLevel),
    Submit,
    Reset(u64),
}

/// Mood check-in card. A struct component so the delayed reset reads the
/// flow state at fire time instead of a stale render snapshot.
pub struct MoodTracker {
    flow: MoodFlow,
    config: PortalConfig,
}

impl Component for MoodTracker {
    type Message = Msg;
    type Properties = MoodTrackerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: MoodFlow::new(),
            config: PortalConfig::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(level) => {
                let before = self.flow.selected();
                self.flow.select(level);
                before != self.flow.selected()
            }
            Msg::Submit => {
                let Some(submission) = self.flow.submit() else {
                    return false;
                };
                Logger::info_with_component(
                    "mood-tracker",
                    &format!("Mood submitted: {}", submission.level.value()),
                );
                if let Some(on_mood_select) = &ctx.props().on_mood_select {
                    on_mood_select.emit(submission.level.value().to_string());
                }
                let delay = self.config.acknowledgment_ms;
                ctx.link().send_future(async move {
                    TimeoutFuture::new(delay).await;
                    Msg::Reset(submission.epoch)
                });
                true
            }
            Msg::Reset(epoch) => self.flow.reset_if_current(epoch),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.flow.is_acknowledged() {
            return html! {
                <div class="mood-tracker mood-tracker-acknowledged">
                    <div class="mood-ack-icon">{"💚"}</div>
                    <h3 class="mood-ack-title">{"Thank you for checking in!"}</h3>
                    <p class="mood-ack-text">
                        {"Your response helps us understand how students are doing."}
                    </p>
                </div>
            };
        }

        let selected = self.flow.selected();

        html! {
            <div class="mood-tracker">
                <h3 class="mood-tracker-title">{"How are you feeling today?"}</h3>

                <div class="mood-options">
                    {for MoodLevel::all().into_iter().map(|level| {
                        let is_selected = selected == Some(level);
                        let onclick = link.callback(move |_| Msg::Select(level));
                        html! {
                            <button
                                class={classes!(
                                    "mood-option",
                                    level.color_class(),
                                    is_selected.then_some("mood-option-selected"),
                                )}
                                {onclick}
                            >
                                <span class="mood-option-label">{level.label()}</span>
                            </button>
                        }
                    })}
                </div>

                {if let Some(level) = selected {
                    html! {
                        <p class="mood-description">{level.description()}</p>
                    }
                } else { html! {} }}

                <button
                    class="btn btn-primary mood-submit-btn"
                    disabled={selected.is_none()}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    {"Submit"}
                </button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> MoodTracker {
        MoodTracker {
            flow: MoodFlow::new(),
            config: PortalConfig::default(),
        }
    }

    // Mirrors the Msg::Select / Msg::Submit arms: a second select before
    // submitting replaces the choice, and the submission carries it.
    #[test]
    fn test_select_then_submit_acknowledges_latest_choice() {
        let mut tracker = tracker();
        tracker.flow.select(MoodLevel::Great);
        tracker.flow.select(MoodLevel::Okay);
        let submission = tracker.flow.submit().expect("submission");
        assert_eq!(submission.level, MoodLevel::Okay);
        assert!(tracker.flow.is_acknowledged());
    }

    // Mirrors Msg::Reset(epoch) arriving from a superseded timer: the
    // acknowledgment for the newer submission must stay up.
    #[test]
    fn test_stale_reset_leaves_acknowledgment_showing() {
        let mut tracker = tracker();
        tracker.flow.select(MoodLevel::Good);
        let first = tracker.flow.submit().expect("first submission");
        assert!(tracker.flow.reset_if_current(first.epoch));

        tracker.flow.select(MoodLevel::Struggling);
        let second = tracker.flow.submit().expect("second submission");
        assert!(!tracker.flow.reset_if_current(first.epoch));
        assert!(tracker.flow.is_acknowledged());
        assert!(tracker.flow.reset_if_current(second.epoch));
        assert!(tracker.flow.selected().is_none());
    }

    // Mirrors Msg::Submit with nothing selected: no submission, so no
    // timer is scheduled and no callback fires.
    #[test]
    fn test_submit_without_selection_schedules_nothing() {
        let mut tracker = tracker();
        assert!(tracker.flow.submit().is_none());
        assert!(!tracker.flow.is_acknowledged());
    }
}
