//! Startup animation that types the welcome lines one character at a time.
//!
//! [`play`] is a plain loop over a caller-supplied delay primitive, so the
//! front end can run it on a worker thread with `thread::sleep` while tests
//! drive it with a recording stub.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeMessage {
    pub text: String,
    pub delay_ms: u64,
}

impl WelcomeMessage {
    pub fn new(text: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            text: text.into(),
            delay_ms,
        }
    }
}

pub fn default_welcome() -> Vec<WelcomeMessage> {
    vec![
        WelcomeMessage::new("Welcome to my interactive portfolio!", 50),
        WelcomeMessage::new(
            "Type 'command' to see the list of available commands.",
            30,
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// A new, empty output line for the next message.
    LineStarted,
    Char(char),
    Finished,
}

/// Messages run strictly in order; each character is followed by its
/// message's delay. `Finished` is always the last event.
pub fn play<S, E>(messages: &[WelcomeMessage], mut sleep: S, mut emit: E)
where
    S: FnMut(Duration),
    E: FnMut(TypewriterEvent),
{
    for message in messages {
        emit(TypewriterEvent::LineStarted);
        let delay = Duration::from_millis(message.delay_ms);
        for c in message.text.chars() {
            emit(TypewriterEvent::Char(c));
            sleep(delay);
        }
    }
    emit(TypewriterEvent::Finished);
}

/// Sum of all delays `play` will wait for.
pub fn total_duration(messages: &[WelcomeMessage]) -> Duration {
    messages
        .iter()
        .map(|m| Duration::from_millis(m.delay_ms.saturating_mul(m.text.chars().count() as u64)))
        .sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_sequence_finishes_immediately() {
        let mut events = Vec::new();
        let mut sleeps = 0;
        play(&[], |_| sleeps += 1, |event| events.push(event));
        assert_eq!(events, vec![TypewriterEvent::Finished]);
        assert_eq!(sleeps, 0);
    }

    #[test]
    fn messages_are_sequential_with_own_delay() {
        let messages = vec![WelcomeMessage::new("ab", 50), WelcomeMessage::new("c", 30)];
        let mut events = Vec::new();
        let mut sleeps = Vec::new();
        play(
            &messages,
            |d| sleeps.push(d.as_millis()),
            |event| events.push(event),
        );

        assert_eq!(
            events,
            vec![
                TypewriterEvent::LineStarted,
                TypewriterEvent::Char('a'),
                TypewriterEvent::Char('b'),
                TypewriterEvent::LineStarted,
                TypewriterEvent::Char('c'),
                TypewriterEvent::Finished,
            ]
        );
        assert_eq!(sleeps, vec![50, 50, 30]);
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let messages = vec![WelcomeMessage::new("ア!", 1)];
        let mut chars = Vec::new();
        play(&messages, |_| {}, |event| {
            if let TypewriterEvent::Char(c) = event {
                chars.push(c);
            }
        });
        assert_eq!(chars, vec!['ア', '!']);
    }

    #[test]
    fn default_welcome_duration() {
        // 36 chars at 50ms + 53 chars at 30ms
        assert_eq!(
            total_duration(&default_welcome()),
            Duration::from_millis(36 * 50 + 53 * 30)
        );
    }
}
