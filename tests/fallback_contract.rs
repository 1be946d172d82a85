#![allow(clippy::unwrap_used)]
//! Fallback and session-context contract tests.
//!
//! These tests drive the public API with a canned backend and verify:
//! - quota errors move on to the next model, in priority order
//! - any other error stops the request
//! - the incoming message and the last reply are remembered per session
//! - an instruction on unchanged input revises the previous reply

use futures_util::stream;
use std::collections::HashMap;
use std::sync::Mutex;

use ryomen::assistant::Assistant;
use ryomen::context::{ReplyRecord, SessionContext};
use ryomen::generation::{FallbackError, FallbackExecutor, Generate, GenerateError, TextStream};
use ryomen::language::LanguagePair;
use ryomen::prompt::{PromptKind, build_reply_prompt};

enum Canned {
    Reply(&'static str),
    Quota,
    Forbidden,
}

/// Backend answering from a fixed table and logging every attempt.
#[derive(Default)]
struct CannedBackend {
    answers: HashMap<&'static str, Canned>,
    attempts: Mutex<Vec<String>>,
}

impl CannedBackend {
    fn answer(mut self, model: &'static str, canned: Canned) -> Self {
        self.answers.insert(model, canned);
        self
    }

    fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

impl Generate for CannedBackend {
    async fn generate(&self, model: &str, _prompt: &str) -> Result<TextStream, GenerateError> {
        self.attempts.lock().unwrap().push(model.to_string());

        match self.answers.get(model) {
            Some(Canned::Reply(text)) => {
                let chunks = vec![Ok(text.to_string())];
                Ok(Box::pin(stream::iter(chunks)))
            }
            Some(Canned::Quota) => Err(GenerateError::QuotaExhausted {
                model: model.to_string(),
                message: "Resource has been exhausted (e.g. check quota).".to_string(),
            }),
            Some(Canned::Forbidden) | None => Err(GenerateError::Api {
                status: 403,
                message: "Permission denied".to_string(),
            }),
        }
    }
}

fn priority_list() -> Vec<String> {
    vec!["model-a".to_string(), "model-b".to_string(), "model-c".to_string()]
}

#[tokio::test]
async fn test_quota_errors_fall_through_in_order() {
    let backend = CannedBackend::default()
        .answer("model-a", Canned::Quota)
        .answer("model-b", Canned::Quota)
        .answer("model-c", Canned::Reply("from C"));
    let executor = FallbackExecutor::new(backend, priority_list());

    let generation = executor.execute("prompt", |_| {}).await.unwrap();

    assert_eq!(generation.text, "from C");
    assert_eq!(generation.model, "model-c");
    assert_eq!(executor.generator().attempts(), executor.models());
}

#[tokio::test]
async fn test_non_quota_error_aborts_immediately() {
    let backend = CannedBackend::default()
        .answer("model-a", Canned::Forbidden)
        .answer("model-b", Canned::Reply("never"))
        .answer("model-c", Canned::Reply("never"));
    let executor = FallbackExecutor::new(backend, priority_list());

    let err = executor.execute("prompt", |_| {}).await.unwrap_err();

    assert!(matches!(
        err,
        FallbackError::Generate(GenerateError::Api { status: 403, .. })
    ));
    assert_eq!(executor.generator().attempts(), vec!["model-a"]);
}

#[tokio::test]
async fn test_all_quota_errors_report_exhaustion() {
    let backend = CannedBackend::default()
        .answer("model-a", Canned::Quota)
        .answer("model-b", Canned::Quota)
        .answer("model-c", Canned::Quota);
    let executor = FallbackExecutor::new(backend, priority_list());

    let err = executor.execute("prompt", |_| {}).await.unwrap_err();

    match &err {
        FallbackError::Exhausted { tried, last } => {
            assert_eq!(tried, &priority_list());
            assert!(last.is_quota_exhausted());
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }
    assert!(err.to_string().contains("model-a, model-b, model-c"));
}

#[tokio::test]
async fn test_translation_remembers_incoming_message() {
    let backend = CannedBackend::default().answer("model-a", Canned::Reply("翻訳"));
    let mut assistant = Assistant::new(
        FallbackExecutor::new(backend, priority_list()),
        LanguagePair::default(),
    );

    assistant
        .translate_incoming("Could we move the meeting to Thursday?", |_| {})
        .await
        .unwrap();

    assert_eq!(
        assistant.context().last_incoming(),
        Some("Could we move the meeting to Thursday?")
    );
}

#[test]
fn test_instruction_on_same_input_revises_previous_result() {
    let mut context = SessionContext::new();
    context.set_incoming("Could we move the meeting to Thursday?");
    context.record_reply(ReplyRecord {
        result: "1. Recommended: Thursday works for me.".to_string(),
        model: "model-a".to_string(),
        input: "木曜で大丈夫です".to_string(),
    });

    let prompt = build_reply_prompt(
        "木曜で大丈夫です",
        &context,
        Some("add that I'm free after 2pm"),
        LanguagePair::default(),
    );

    assert_eq!(prompt.kind, PromptKind::Revision);
    assert!(prompt.text.contains("Thursday works for me."));
    assert!(prompt.text.contains("add that I'm free after 2pm"));
}

#[test]
fn test_instruction_without_previous_result_builds_fresh_prompt() {
    let context = SessionContext::new();

    let prompt = build_reply_prompt(
        "木曜で大丈夫です",
        &context,
        Some("add that I'm free after 2pm"),
        LanguagePair::default(),
    );

    assert_eq!(prompt.kind, PromptKind::Fresh);
    assert!(prompt.text.contains("Recommended"));
    assert!(prompt.text.contains("Formal"));
    assert!(prompt.text.contains("Casual"));
}

#[tokio::test]
async fn test_reset_clears_reply_result_model_and_input() {
    let backend = CannedBackend::default().answer("model-a", Canned::Reply("drafts"));
    let mut assistant = Assistant::new(
        FallbackExecutor::new(backend, priority_list()),
        LanguagePair::default(),
    );
    assistant.translate_incoming("Thanks!", |_| {}).await.unwrap();
    assistant.draft_reply("どういたしまして", None, |_| {}).await.unwrap();
    assert!(assistant.context().last_reply().is_some());

    assistant.reset_reply();

    assert!(assistant.context().last_reply().is_none());
    assert_eq!(assistant.context().last_incoming(), Some("Thanks!"));
}
