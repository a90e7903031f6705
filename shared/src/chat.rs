//! Crisis chat transcript with a simulated support reply.
//!
//! There is no chat backend; the support side is a canned response
//! delivered after a short delay owned by the hosting surface. The same
//! epoch scheme as the mood flow keeps a late timer from appending to a
//! transcript that was since closed or superseded.

use serde::{Deserialize, Serialize};

use crate::{ChatMessage, ChatSender};

const GREETING: &str = "Hello, I'm here to help. How can I support you today?";
const CANNED_REPLY: &str = "Thank you for sharing. I'm here to support you. \
    Can you tell me more about what you're experiencing?";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    epoch: u64,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    /// A fresh transcript seeded with the support greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: ChatSender::Support,
                text: GREETING.to_string(),
            }],
            epoch: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message and hand back the epoch the host passes to
    /// [`Self::deliver_reply_if_current`] when its reply timer fires.
    /// Blank messages are dropped.
    pub fn send(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            sender: ChatSender::User,
            text: text.to_string(),
        });
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Deliver the canned support reply unless a newer message or a reset
    /// superseded the timer. Returns whether a reply was appended.
    pub fn deliver_reply_if_current(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.messages.push(ChatMessage {
            sender: ChatSender::Support,
            text: CANNED_REPLY.to_string(),
        });
        true
    }

    /// Clear the transcript back to the greeting (session closed). The
    /// epoch keeps counting so a reply timer from the old session can
    /// never land in the new one.
    pub fn reset(&mut self) {
        self.messages = vec![ChatMessage {
            sender: ChatSender::Support,
            text: GREETING.to_string(),
        }];
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_has_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].sender, ChatSender::Support);
    }

    #[test]
    fn test_send_then_reply() {
        let mut transcript = ChatTranscript::new();
        let epoch = transcript.send("I'm feeling stressed about exams").unwrap();
        assert_eq!(transcript.messages().len(), 2);
        assert!(transcript.deliver_reply_if_current(epoch));
        assert_eq!(transcript.messages().len(), 3);
        assert_eq!(transcript.messages()[2].sender, ChatSender::Support);
    }

    #[test]
    fn test_blank_messages_are_dropped() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.send("   ").is_none());
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn test_newer_message_supersedes_pending_reply() {
        let mut transcript = ChatTranscript::new();
        let first = transcript.send("first").unwrap();
        let second = transcript.send("second").unwrap();
        assert!(!transcript.deliver_reply_if_current(first));
        assert!(transcript.deliver_reply_if_current(second));
    }

    #[test]
    fn test_reset_invalidates_pending_reply() {
        let mut transcript = ChatTranscript::new();
        let epoch = transcript.send("hello").unwrap();
        transcript.reset();
        assert!(!transcript.deliver_reply_if_current(epoch));
        assert_eq!(transcript.messages().len(), 1);
    }
}
