//! Session-scoped state shared by the two panes.
//!
//! Lives for one interactive session and is never written to disk.

/// The last successful reply draft and what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    /// The generated reply suggestions.
    pub result: String,
    /// The model that generated them.
    pub model: String,
    /// The native-language intent they were drafted from.
    pub input: String,
}

/// Per-session context spanning submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    last_incoming: Option<String>,
    last_reply: Option<ReplyRecord>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent message submitted to the incoming pane.
    pub fn last_incoming(&self) -> Option<&str> {
        self.last_incoming.as_deref()
    }

    /// Overwrites the incoming message.
    pub fn set_incoming(&mut self, text: impl Into<String>) {
        self.last_incoming = Some(text.into());
    }

    pub const fn last_reply(&self) -> Option<&ReplyRecord> {
        self.last_reply.as_ref()
    }

    /// Replaces the stored reply result, model and input together.
    pub fn record_reply(&mut self, record: ReplyRecord) {
        self.last_reply = Some(record);
    }

    /// Clears the stored reply result, model and input.
    pub fn reset_reply(&mut self) {
        self.last_reply = None;
    }

    /// Clears everything, including the incoming message.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a reply submission should revise the previous result.
    ///
    /// True when a previous result exists, `input` matches the input that
    /// produced it, and `instruction` is non-empty. Whitespace at either end
    /// is ignored on both sides.
    pub fn is_refinement(&self, input: &str, instruction: Option<&str>) -> bool {
        let has_instruction = instruction.is_some_and(|i| !i.trim().is_empty());
        has_instruction
            && self
                .last_reply
                .as_ref()
                .is_some_and(|r| r.input.trim() == input.trim())
    }
}
