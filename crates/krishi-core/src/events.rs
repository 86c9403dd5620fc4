use serde::{Deserialize, Serialize};

use crate::types::{MessageAuthor, MessageCategory};

/// Domain events emitted by a chat session.
///
/// Events are broadcast after state changes and consumed by the presentation
/// layer for live rendering (new bubbles, the typing indicator). Delivery is
/// lossy for slow subscribers; the message log itself is the source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SessionEvent {
    /// A message was appended to the conversation log.
    MessageAppended {
        id: u64,
        author: MessageAuthor,
        category: MessageCategory,
    },

    /// The "assistant is composing" indicator changed.
    ComposingChanged { composing: bool },

    /// The session was closed; no further replies will arrive.
    SessionClosed,
}
