//! The two panes as operations over one session.
//!
//! [`Assistant`] owns the session context and runs every submission through
//! the prompt builder and the fallback executor.

use thiserror::Error;

use crate::context::{ReplyRecord, SessionContext};
use crate::generation::{FallbackError, FallbackExecutor, Generate, Generation};
use crate::language::LanguagePair;
use crate::prompt::{PromptKind, build_reply_prompt, build_translation_prompt};

/// Errors from a pane submission.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Refinement instruction is empty")]
    EmptyInstruction,

    #[error("There is no reply to refine yet. Draft one first.")]
    NothingToRefine,

    #[error(transparent)]
    Generation(#[from] FallbackError),
}

/// A reply draft and which prompt produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDraft {
    pub generation: Generation,
    pub kind: PromptKind,
}

pub struct Assistant<G> {
    executor: FallbackExecutor<G>,
    context: SessionContext,
    languages: LanguagePair,
}

impl<G: Generate> Assistant<G> {
    pub fn new(executor: FallbackExecutor<G>, languages: LanguagePair) -> Self {
        Self {
            executor,
            context: SessionContext::new(),
            languages,
        }
    }

    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Supplies the message being replied to without translating it.
    pub fn set_incoming(&mut self, text: &str) {
        self.context.set_incoming(text.trim());
    }

    /// Translates an incoming message and analyses its tone.
    ///
    /// The message becomes the reply context as soon as it is submitted,
    /// whether or not the translation succeeds.
    pub async fn translate_incoming<F>(&mut self, text: &str, on_chunk: F) -> Result<Generation, AssistantError>
    where
        F: FnMut(&str),
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyInput);
        }

        self.context.set_incoming(text);
        let prompt = build_translation_prompt(text, self.languages);

        Ok(self.executor.execute(&prompt, on_chunk).await?)
    }

    /// Drafts replies from native-language intent.
    ///
    /// On success the result, model and input replace the stored reply; on
    /// failure the previous reply is kept.
    pub async fn draft_reply<F>(
        &mut self,
        text: &str,
        instruction: Option<&str>,
        on_chunk: F,
    ) -> Result<ReplyDraft, AssistantError>
    where
        F: FnMut(&str),
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyInput);
        }

        let prompt = build_reply_prompt(text, &self.context, instruction, self.languages);
        tracing::debug!(kind = ?prompt.kind, "drafting reply");

        let generation = self.executor.execute(&prompt.text, on_chunk).await?;

        self.context.record_reply(ReplyRecord {
            result: generation.text.clone(),
            model: generation.model.clone(),
            input: text.to_string(),
        });

        Ok(ReplyDraft {
            generation,
            kind: prompt.kind,
        })
    }

    /// Revises the stored reply with `instruction`.
    pub async fn refine_reply<F>(&mut self, instruction: &str, on_chunk: F) -> Result<ReplyDraft, AssistantError>
    where
        F: FnMut(&str),
    {
        if instruction.trim().is_empty() {
            return Err(AssistantError::EmptyInstruction);
        }

        let input = self
            .context
            .last_reply()
            .map(|r| r.input.clone())
            .ok_or(AssistantError::NothingToRefine)?;

        self.draft_reply(&input, Some(instruction), on_chunk).await
    }

    /// Clears the stored reply result, model and input.
    pub fn reset_reply(&mut self) {
        self.context.reset_reply();
    }

    /// Clears the whole session context.
    pub fn clear(&mut self) {
        self.context.clear();
    }

    #[cfg(test)]
    pub(crate) const fn executor(&self) -> &FallbackExecutor<G> {
        &self.executor
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::generation::{GenerateError, Outcome, ScriptedGenerator};

    fn assistant(generator: ScriptedGenerator) -> Assistant<ScriptedGenerator> {
        let models = vec!["primary".to_string(), "backup".to_string()];
        Assistant::new(
            FallbackExecutor::new(generator, models),
            LanguagePair::default(),
        )
    }

    fn last_prompt(assistant: &Assistant<ScriptedGenerator>) -> String {
        assistant.executor().generator().last_prompt().unwrap()
    }

    #[tokio::test]
    async fn test_translate_sets_incoming_context() {
        let mut assistant =
            assistant(ScriptedGenerator::default().with("primary", Outcome::Text(vec!["翻訳"])));

        let generation = assistant
            .translate_incoming("  Thanks for the quick reply!\n", |_| {})
            .await
            .unwrap();

        assert_eq!(generation.text, "翻訳");
        assert_eq!(assistant.context().last_incoming(), Some("Thanks for the quick reply!"));
        assert!(last_prompt(&assistant).contains("Thanks for the quick reply!"));
    }

    #[tokio::test]
    async fn test_translate_failure_still_sets_incoming() {
        let mut assistant =
            assistant(ScriptedGenerator::default().with("primary", Outcome::Fail(500)));

        let err = assistant.translate_incoming("Hello", |_| {}).await.unwrap_err();

        assert!(matches!(
            err,
            AssistantError::Generation(FallbackError::Generate(GenerateError::Api { status: 500, .. }))
        ));
        assert_eq!(assistant.context().last_incoming(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_translate_empty_input() {
        let mut assistant = assistant(ScriptedGenerator::default());

        let err = assistant.translate_incoming("   ", |_| {}).await.unwrap_err();

        assert!(matches!(err, AssistantError::EmptyInput));
        assert!(assistant.context().last_incoming().is_none());
        assert!(assistant.executor().generator().called_models().is_empty());
    }

    #[tokio::test]
    async fn test_reply_uses_incoming_context_and_records_result() {
        let mut assistant = assistant(
            ScriptedGenerator::default()
                .with("primary", Outcome::Quota)
                .with("backup", Outcome::Text(vec!["1. Recommended: Sure!"])),
        );
        assistant.context.set_incoming("Can you join at 3pm?");

        let draft = assistant.draft_reply("参加します", None, |_| {}).await.unwrap();

        assert_eq!(draft.kind, PromptKind::Fresh);
        assert_eq!(draft.generation.model, "backup");
        assert!(last_prompt(&assistant).contains("Sender's message: Can you join at 3pm?"));

        let record = assistant.context().last_reply().unwrap();
        assert_eq!(record.result, "1. Recommended: Sure!");
        assert_eq!(record.model, "backup");
        assert_eq!(record.input, "参加します");
    }

    #[tokio::test]
    async fn test_same_input_with_instruction_revises_previous_result() {
        let mut assistant = assistant(
            ScriptedGenerator::default().with("primary", Outcome::Text(vec!["draft one"])),
        );

        assistant.draft_reply("参加します", None, |_| {}).await.unwrap();
        let draft = assistant
            .draft_reply("参加します", Some("more enthusiastic"), |_| {})
            .await
            .unwrap();

        assert_eq!(draft.kind, PromptKind::Revision);
        let prompt = last_prompt(&assistant);
        assert!(prompt.contains("[Previous result]\ndraft one"));
        assert!(prompt.contains("more enthusiastic"));
    }

    #[tokio::test]
    async fn test_refine_reuses_stored_input() {
        let mut assistant = assistant(
            ScriptedGenerator::default().with("primary", Outcome::Text(vec!["draft"])),
        );

        assistant.draft_reply("確認します", None, |_| {}).await.unwrap();
        let draft = assistant.refine_reply("shorter please", |_| {}).await.unwrap();

        assert_eq!(draft.kind, PromptKind::Revision);
        assert_eq!(assistant.context().last_reply().unwrap().input, "確認します");
    }

    #[tokio::test]
    async fn test_refine_without_previous_reply() {
        let mut assistant = assistant(ScriptedGenerator::default());

        let err = assistant.refine_reply("shorter", |_| {}).await.unwrap_err();
        assert!(matches!(err, AssistantError::NothingToRefine));

        let err = assistant.refine_reply("  ", |_| {}).await.unwrap_err();
        assert!(matches!(err, AssistantError::EmptyInstruction));
    }

    #[tokio::test]
    async fn test_failed_reply_keeps_previous_record() {
        let mut assistant = assistant(
            ScriptedGenerator::default().with("primary", Outcome::Text(vec!["first"])),
        );
        assistant.draft_reply("はい", None, |_| {}).await.unwrap();

        let mut failing = Assistant::new(
            FallbackExecutor::new(
                ScriptedGenerator::default()
                    .with("primary", Outcome::Quota)
                    .with("backup", Outcome::Quota),
                vec!["primary".to_string(), "backup".to_string()],
            ),
            LanguagePair::default(),
        );
        failing.context = assistant.context().clone();

        let err = failing.draft_reply("いいえ", None, |_| {}).await.unwrap_err();

        assert!(matches!(
            err,
            AssistantError::Generation(FallbackError::Exhausted { .. })
        ));
        assert_eq!(failing.context().last_reply().unwrap().result, "first");
    }

    #[tokio::test]
    async fn test_reset_then_instruction_builds_fresh_prompt() {
        let mut assistant = assistant(
            ScriptedGenerator::default().with("primary", Outcome::Text(vec!["draft"])),
        );
        assistant.draft_reply("はい", None, |_| {}).await.unwrap();

        assistant.reset_reply();
        assert!(assistant.context().last_reply().is_none());

        let draft = assistant
            .draft_reply("はい", Some("shorter"), |_| {})
            .await
            .unwrap();
        assert_eq!(draft.kind, PromptKind::Fresh);
    }

    #[tokio::test]
    async fn test_clear_drops_incoming_too() {
        let mut assistant = assistant(
            ScriptedGenerator::default().with("primary", Outcome::Text(vec!["ok"])),
        );
        assistant.translate_incoming("Hi", |_| {}).await.unwrap();

        assistant.clear();

        assert_eq!(assistant.context(), &SessionContext::default());
    }
}
