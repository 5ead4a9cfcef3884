//! Scripted FAQ assistant.
//!
//! Answers come from three places, tried in order:
//! 1. the literal command `help`, answered with a fixed topic menu
//! 2. the [`FAQS`] table, first entry whose trigger appears in the input
//! 3. a generic answer picked at random after a short artificial delay
//!
//! A [`ChatSession`] starts idle. Opening it seeds the greeting and makes
//! it active; resetting clears the transcript and returns it to idle.

use rand::{Rng, rng};
use std::ops::Range;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument};

pub const GREETING: &str = "👋 Hello! I'm your Atlantis Smart City Assistant. Ask me anything about our services, or type 'help' for available topics!";

pub const HELP_TEXT: &str = "I can help you with:\n• Smart City Features\n• Transportation Services\n• Waste Management\n• Energy Systems\n\nWhat would you like to know about?";

/// Trigger phrase and answer, checked in declaration order.
pub const FAQS: &[(&str, &str)] = &[
    (
        "what is atlantis",
        "Atlantis is an innovative smart city platform designed to enhance urban living through technology.",
    ),
    (
        "features",
        "Our smart city features include:\n• Real-time traffic monitoring\n• Smart waste management\n• Energy consumption tracking\n• Emergency response system\n• Community engagement portal",
    ),
    (
        "transportation",
        "Our transportation services offer:\n• Live bus/metro tracking\n• Smart parking locations\n• Traffic updates\n• Bike-sharing system",
    ),
    (
        "waste",
        "Our waste management includes:\n• Automated collection\n• Smart bin monitoring\n• Recycling programs\n• Waste sorting guides",
    ),
];

pub const GENERIC_RESPONSES: &[&str] = &[
    "Our smart city is designed to improve urban living through innovative technologies.",
    "Atlantis focuses on sustainable urban solutions, including smart transportation and energy management.",
    "We're committed to creating more efficient and connected urban environments.",
    "Our smart city platform integrates various services to enhance citizen experiences.",
    "Transportation, waste management, and energy systems are key focus areas of our smart city initiative.",
];

/// Bounds of the artificial "thinking" delay, in milliseconds.
pub const REPLY_DELAY_MS: Range<u64> = 500..1500;

/// Answer from the help command or the FAQ table, if either applies.
pub fn faq_answer(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    if input == "help" {
        return Some(HELP_TEXT);
    }
    FAQS.iter()
        .find(|(trigger, _)| input.contains(trigger))
        .map(|(_, answer)| *answer)
}

/// Answer one user message.
///
/// Scripted answers return immediately. Anything else waits a random
/// delay from [`REPLY_DELAY_MS`] and returns one of [`GENERIC_RESPONSES`].
#[instrument(level = "debug", skip_all)]
pub async fn respond(input: &str) -> String {
    if let Some(answer) = faq_answer(input) {
        return answer.to_string();
    }

    let (delay, answer) = {
        let mut rng = rng();
        let delay = Duration::from_millis(rng.random_range(REPLY_DELAY_MS));
        let answer = GENERIC_RESPONSES[rng.random_range(0..GENERIC_RESPONSES.len())];
        (delay, answer)
    };
    debug!(?delay, "No scripted answer; replying generically");
    sleep(delay).await;
    answer.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// One conversation with the assistant.
#[derive(Debug)]
pub struct ChatSession {
    state: ChatState,
    transcript: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            state: ChatState::Idle,
            transcript: Vec::new(),
        }
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Open the session, greeting the user the first time.
    pub fn open(&mut self) {
        if self.state == ChatState::Idle {
            self.transcript.push(ChatMessage {
                speaker: Speaker::Assistant,
                text: GREETING.to_string(),
            });
            self.state = ChatState::Active;
        }
    }

    /// Send a user message and return the assistant's reply.
    ///
    /// Blank input is ignored and returns `None`. Anything else is recorded
    /// and answered as typed, surrounding whitespace included. The session
    /// is opened first if it is still idle.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        self.open();
        self.transcript.push(ChatMessage {
            speaker: Speaker::User,
            text: input.to_string(),
        });
        let reply = respond(input).await;
        self.transcript.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: reply,
        });
        self.transcript.last()
    }

    /// Forget the conversation and return to idle.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.state = ChatState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_help_any_case() {
        assert_eq!(faq_answer("help"), Some(HELP_TEXT));
        assert_eq!(faq_answer("HELP"), Some(HELP_TEXT));
        assert_eq!(faq_answer("HeLp"), Some(HELP_TEXT));
    }

    #[test]
    fn test_help_must_match_exactly() {
        assert_eq!(faq_answer("help me"), None);
    }

    #[test]
    fn test_faq_substring() {
        let features = FAQS[1].1;
        assert_eq!(faq_answer("features"), Some(features));
        assert_eq!(faq_answer("Tell me about the FEATURES please"), Some(features));
        assert_eq!(faq_answer("what is Atlantis?"), Some(FAQS[0].1));
    }

    #[test]
    fn test_faq_declaration_order() {
        // Mentions both "waste" and "features"; the earlier entry wins
        assert_eq!(faq_answer("waste features"), Some(FAQS[1].1));
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(faq_answer("weather tomorrow"), None);
    }

    #[tokio::test]
    async fn test_scripted_answer_is_immediate() {
        assert_eq!(respond("HELP").await, HELP_TEXT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generic_answer_within_delay_window() {
        for _ in 0..20 {
            let t0 = Instant::now();
            let answer = respond("what's the weather like").await;
            let elapsed = t0.elapsed();

            assert!(GENERIC_RESPONSES.contains(&answer.as_str()));
            assert!(elapsed >= Duration::from_millis(REPLY_DELAY_MS.start));
            assert!(elapsed < Duration::from_millis(REPLY_DELAY_MS.end));
        }
    }

    #[test]
    fn test_open_seeds_greeting_once() {
        let mut session = ChatSession::new();
        assert_eq!(session.state(), ChatState::Idle);
        assert!(session.transcript().is_empty());

        session.open();
        session.open();
        assert_eq!(session.state(), ChatState::Active);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_send_records_both_sides() {
        let mut session = ChatSession::new();
        let reply = session.send("  features  ").await.unwrap().clone();

        assert_eq!(reply.speaker, Speaker::Assistant);
        assert_eq!(reply.text, FAQS[1].1);
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].speaker, Speaker::User);
        assert_eq!(transcript[1].text, "  features  ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_padded_help_is_not_the_help_command() {
        let mut session = ChatSession::new();
        let reply = session.send(" help ").await.unwrap().clone();

        assert_ne!(reply.text, HELP_TEXT);
        assert!(GENERIC_RESPONSES.contains(&reply.text.as_str()));
        assert_eq!(session.transcript()[1].text, " help ");
    }

    #[tokio::test]
    async fn test_send_ignores_blank_input() {
        let mut session = ChatSession::new();
        assert!(session.send("   ").await.is_none());
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let mut session = ChatSession::new();
        session.send("help").await;
        session.reset();
        assert_eq!(session.state(), ChatState::Idle);
        assert!(session.transcript().is_empty());

        session.open();
        assert_eq!(session.transcript().len(), 1);
    }
}
