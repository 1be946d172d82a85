//! Prompt construction for the incoming and reply panes.

mod reply;
mod translate;

pub use reply::{REPLY_TEMPLATE, REVISION_TEMPLATE, build_reply_prompt};
pub use translate::{TRANSLATION_TEMPLATE, build_translation_prompt};

/// Which reply prompt was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// A fresh three-variant draft.
    Fresh,
    /// A revision of the previous result.
    Revision,
}

/// A reply prompt and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPrompt {
    pub kind: PromptKind,
    pub text: String,
}

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text containing
/// brace sequences is inserted verbatim. Unknown placeholders are kept.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
