//! Language codes and the native/foreign pair the panes translate between.

use anyhow::Result;

use crate::ui::Style;

/// Default native language: what the user reads and writes.
pub const DEFAULT_NATIVE: &str = "ja";

/// Default foreign language: what correspondents write in.
pub const DEFAULT_FOREIGN: &str = "en";

/// Supported language codes (ISO 639-1) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Returns the display name for a supported language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

fn lookup(lang: &str) -> Result<&'static str> {
    language_name(lang).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): ja, en, zh, ko, fr, de, es, ...\n\
             Run 'ryomen languages' to see all supported codes."
        )
    })
}

/// The two languages the panes work between.
///
/// The incoming pane translates `foreign` into `native`; the reply pane
/// drafts `foreign` text from `native` intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub native: &'static str,
    pub foreign: &'static str,
}

impl LanguagePair {
    /// Builds a pair from two language codes, resolving their display names.
    pub fn from_codes(native: &str, foreign: &str) -> Result<Self> {
        if native == foreign {
            anyhow::bail!(
                "Native and foreign language are both '{native}'\n\n\
                 Choose two different languages with --native and --foreign."
            );
        }

        Ok(Self {
            native: lookup(native)?,
            foreign: lookup(foreign)?,
        })
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            native: "Japanese",
            foreign: "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_valid() {
        assert!(lookup("ja").is_ok());
        assert!(lookup("en").is_ok());
        assert!(lookup("zh-TW").is_ok());
    }

    #[test]
    fn test_lookup_invalid() {
        assert!(lookup("invalid").is_err());
        assert!(lookup("").is_err());
        assert!(lookup("JP").is_err()); // Case sensitive
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("ja"), Some("Japanese"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn test_language_pair_from_codes() {
        let pair = LanguagePair::from_codes("ja", "en").unwrap_or_default();
        assert_eq!(pair, LanguagePair::default());

        let pair = LanguagePair::from_codes("de", "fr").unwrap_or_default();
        assert_eq!(pair.native, "German");
        assert_eq!(pair.foreign, "French");
    }

    #[test]
    fn test_language_pair_rejects_same_language() {
        let err = LanguagePair::from_codes("en", "en").unwrap_err();
        assert!(err.to_string().contains("both 'en'"));
    }

    #[test]
    fn test_language_pair_rejects_unknown_code() {
        assert!(LanguagePair::from_codes("ja", "klingon").is_err());
    }
}
