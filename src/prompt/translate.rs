use super::fill;
use crate::language::LanguagePair;

#[allow(clippy::literal_string_with_formatting_args)]
pub const TRANSLATION_TEMPLATE: &str = "You are a professional business interpreter. \
Translate the {foreign} message below into natural {native}.

[Instructions]
1. Decide whether the message is an email or a chat message, and describe the sender's tone \
(for example formal, friendly, urgent, apologetic) in one or two sentences written in {native}.
2. Then give the full translation in {native}, carrying over the same tone and level of politeness.
3. Preserve paragraph breaks. Do not add content that is not in the original.

[{foreign} message]
{text}";

/// Builds the incoming-pane prompt: tone analysis plus translation.
pub fn build_translation_prompt(text: &str, languages: LanguagePair) -> String {
    fill(
        TRANSLATION_TEMPLATE,
        &[
            ("native", languages.native),
            ("foreign", languages.foreign),
            ("text", text.trim()),
        ],
    )
}
