use super::{PromptKind, ReplyPrompt, fill};
use crate::context::SessionContext;
use crate::language::LanguagePair;

/// Placeholder text for an absent incoming message.
const NO_CONTEXT: &str = "None";

/// Fixed three-variant output contract shared by both reply prompts.
#[allow(clippy::literal_string_with_formatting_args)]
const OUTPUT_FORMAT: &str = "[Output format]
1. Recommended: mirror the tone of the sender's message (or a neutral business tone if there is none). \
Explain in {native} why this tone fits.
2. Formal: polite and formal.
3. Casual: short and relaxed.
Under each draft, add a {native} back-translation.";

#[allow(clippy::literal_string_with_formatting_args)]
pub const REPLY_TEMPLATE: &str = "You are a professional business translator. \
Draft {foreign} replies that express the {native} intent below.

[Context]
Sender's message: {incoming}

[Intent ({native})]
{input}
{instruction}
{format}";

#[allow(clippy::literal_string_with_formatting_args)]
pub const REVISION_TEMPLATE: &str = "You are a professional business translator. \
You previously drafted the {foreign} reply suggestions below. Revise them according to the revision request.

[Context]
Sender's message: {incoming}

[Intent ({native})]
{input}

[Previous result]
{previous}

[Revision request]
{instruction}

Keep the same structure.
{format}";

/// Builds the reply-pane prompt.
///
/// Produces a revision of the stored result when the context holds one for
/// the same `input` and a non-empty `instruction` is given; otherwise a
/// fresh draft, with the instruction (if any) appended as an extra request.
pub fn build_reply_prompt(
    input: &str,
    context: &SessionContext,
    instruction: Option<&str>,
    languages: LanguagePair,
) -> ReplyPrompt {
    let input = input.trim();
    let instruction = instruction.map(str::trim).filter(|i| !i.is_empty());
    let incoming = context.last_incoming().map_or(NO_CONTEXT, str::trim);
    let format = fill(OUTPUT_FORMAT, &[("native", languages.native)]);

    let previous = context
        .last_reply()
        .filter(|_| context.is_refinement(input, instruction));

    match (previous, instruction) {
        (Some(previous), Some(instruction)) => ReplyPrompt {
            kind: PromptKind::Revision,
            text: fill(
                REVISION_TEMPLATE,
                &[
                    ("native", languages.native),
                    ("foreign", languages.foreign),
                    ("incoming", incoming),
                    ("input", input),
                    ("previous", previous.result.trim()),
                    ("instruction", instruction),
                    ("format", &format),
                ],
            ),
        },
        _ => {
            let extra = instruction
                .map(|i| format!("\n[Additional instruction]\n{i}\n"))
                .unwrap_or_default();

            ReplyPrompt {
                kind: PromptKind::Fresh,
                text: fill(
                    REPLY_TEMPLATE,
                    &[
                        ("native", languages.native),
                        ("foreign", languages.foreign),
                        ("incoming", incoming),
                        ("input", input),
                        ("instruction", &extra),
                        ("format", &format),
                    ],
                ),
            }
        }
    }
}
