use gloo::timers::future::TimeoutFuture;
use shared::{ChatSender, ChatTranscript, PortalConfig};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub on_close: Callback<()>,
}

pub enum Msg {
    UpdateDraft(String),
    Send,
    Reply(u64),
    Close,
}

/// Crisis chat overlay. The simulated support reply arrives on a timer,
/// so this is a struct component; the delayed message reads the live
/// transcript rather than a snapshot from the sending render.
pub struct ChatPanel {
    transcript: ChatTranscript,
    draft: String,
    config: PortalConfig,
}

impl Component for ChatPanel {
    type Message = Msg;
    type Properties = ChatPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            transcript: ChatTranscript::new(),
            draft: String::new(),
            config: PortalConfig::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateDraft(text) => {
                self.draft = text;
                true
            }
            Msg::Send => {
                let Some(epoch) = self.transcript.send(&self.draft) else {
                    return false;
                };
                self.draft.clear();
                Logger::debug_with_component("chat-panel", "User message sent");
                let delay = self.config.chat_reply_delay_ms;
                ctx.link().send_future(async move {
                    TimeoutFuture::new(delay).await;
                    Msg::Reply(epoch)
                });
                true
            }
            Msg::Reply(epoch) => self.transcript.deliver_reply_if_current(epoch),
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateDraft(input.value())
        });

        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Send
        });

        let blank = self.draft.trim().is_empty();

        html! {
            <div class="chat-panel">
                <div class="chat-header">
                    <span class="chat-header-title">{"Crisis Support Chat"}</span>
                    <button
                        class="chat-close-btn"
                        aria-label="Close chat"
                        onclick={link.callback(|_| Msg::Close)}
                    >
                        {"✕"}
                    </button>
                </div>

                <div class="chat-messages">
                    {for self.transcript.messages().iter().map(|message| {
                        let side = match message.sender {
                            ChatSender::User => "chat-message-user",
                            ChatSender::Support => "chat-message-support",
                        };
                        html! {
                            <div class={classes!("chat-message", side)}>
                                <p class="chat-message-text">{&message.text}</p>
                            </div>
                        }
                    })}
                </div>

                <form class="chat-input-row" onsubmit={on_submit}>
                    <input
                        type="text"
                        class="chat-input"
                        placeholder="Type your message..."
                        value={self.draft.clone()}
                        oninput={on_input}
                    />
                    <button type="submit" class="btn btn-primary chat-send-btn" disabled={blank}>
                        {"Send"}
                    </button>
                </form>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ChatPanel {
        ChatPanel {
            transcript: ChatTranscript::new(),
            draft: String::new(),
            config: PortalConfig::default(),
        }
    }

    // Mirrors the Msg::Send arm: the draft is appended as a user message,
    // cleared, and the returned epoch delivers the reply.
    #[test]
    fn test_send_appends_draft_and_delivers_reply() {
        let mut panel = panel();
        panel.draft = "I'm feeling overwhelmed".to_string();
        let epoch = panel.transcript.send(&panel.draft).expect("epoch");
        panel.draft.clear();

        assert_eq!(panel.transcript.messages().len(), 2);
        assert_eq!(panel.transcript.messages()[1].sender, ChatSender::User);
        assert!(panel.transcript.deliver_reply_if_current(epoch));
        assert_eq!(panel.transcript.messages()[2].sender, ChatSender::Support);
    }

    // Mirrors Msg::Send with a whitespace draft: nothing is appended and
    // no reply timer is scheduled.
    #[test]
    fn test_blank_draft_send_is_noop() {
        let mut panel = panel();
        panel.draft = "   ".to_string();
        assert!(panel.transcript.send(&panel.draft).is_none());
        assert_eq!(panel.transcript.messages().len(), 1);
    }

    // Mirrors Msg::Reply(epoch) firing after a newer message was sent:
    // the stale reply is dropped, the current one lands.
    #[test]
    fn test_stale_reply_is_dropped_after_newer_send() {
        let mut panel = panel();
        let first = panel.transcript.send("first").expect("first epoch");
        let second = panel.transcript.send("second").expect("second epoch");

        assert!(!panel.transcript.deliver_reply_if_current(first));
        assert_eq!(panel.transcript.messages().len(), 3);
        assert!(panel.transcript.deliver_reply_if_current(second));
        assert_eq!(panel.transcript.messages().len(), 4);
    }
}
