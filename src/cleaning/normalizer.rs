//! Tweet normalization.
//!
//! Steps are applied in a fixed order:
//!
//! 1. leading `RT ` marker,
//! 2. http(s) links,
//! 3. `pic.twitter.com` links,
//! 4. dot runs (`..`, `. . .`) into ` . `,
//! 5. mentions (`@handle:`) into the bare handle,
//! 6. hashtags,
//! 7. emoji (optional),
//! 8. whitespace.
//!
//! Leading whitespace is collapsed but not trimmed, so a `RT ` uncovered by the removal of
//! leading noise never reaches the start of the text.
//!
//! Links go first so that dots, `@` or `#` inside them are never read as punctuation, mentions or hashtags.
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Prefix of retweets.
const REPOST_MARKER: &str = "RT ";

lazy_static! {
    // space is not a link character: text after a link is kept
    static ref URL: Regex =
        Regex::new(r"https?://(?:[$-_@.&+!*(),a-zA-Z0-9]|%[0-9a-fA-F]{2})+").unwrap();
    static ref PIC_URL: Regex = Regex::new(r"pic\.twitter\.com/\w+").unwrap();
    static ref MULTI_DOT: Regex = Regex::new(r" *(?:\. *)+").unwrap();
    static ref MENTION: Regex = Regex::new(r"@(\w{1,15}) *:*").unwrap();
    static ref HASHTAG: Regex = Regex::new(r"#\w*\p{L}\w*").unwrap();
    static ref EMOJI: Regex = Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F300}-\x{1F5FF}", // symbols & pictographs
        r"\x{1F680}-\x{1F6FF}", // transport & map symbols
        r"\x{1F1E0}-\x{1F1FF}", // flags
        r"\x{2760}-\x{276F}",
        "]+"
    ))
    .unwrap();
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// How a mention is rendered once its `@`/`:` syntax is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MentionStyle {
    /// keep the handle as is (`@jane_doe:` -> `jane_doe`)
    #[default]
    Handle,
    /// keep alphabetic characters only (`@jane_doe:` -> `jane doe`)
    Letters,
}

impl FromStr for MentionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "handle" => Ok(Self::Handle),
            "letters" => Ok(Self::Letters),
            other => Err(format!(
                "unknown mention style {:?} (expected handle or letters)",
                other
            )),
        }
    }
}

/// Configurable tweet normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    mentions: MentionStyle,
    strip_emoji: bool,
}

impl Normalizer {
    pub fn new(mentions: MentionStyle, strip_emoji: bool) -> Self {
        Self {
            mentions,
            strip_emoji,
        }
    }

    /// Clean a raw tweet.
    ///
    /// The result is single-spaced with no trailing whitespace, and starts with at most one space.
    /// Text that matches none of the patterns is only affected by whitespace collapsing.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.strip_prefix(REPOST_MARKER).unwrap_or(text);

        let cleaned = URL.replace_all(text, "");
        let cleaned = PIC_URL.replace_all(&cleaned, "");
        let cleaned = MULTI_DOT.replace_all(&cleaned, " . ");
        let cleaned = MENTION.replace_all(&cleaned, |caps: &Captures| {
            self.render_mention(&caps[1])
        });
        let mut cleaned = HASHTAG.replace_all(&cleaned, " ").into_owned();
        if self.strip_emoji {
            cleaned = EMOJI.replace_all(&cleaned, " ").into_owned();
        }

        MULTI_SPACE.replace_all(&cleaned, " ").trim_end().to_string()
    }

    fn render_mention(&self, handle: &str) -> String {
        match self.mentions {
            MentionStyle::Handle => format!(" {} ", handle),
            MentionStyle::Letters => {
                let letters: String = handle
                    .chars()
                    .map(|c| if c.is_alphabetic() { c } else { ' ' })
                    .collect();
                format!(" {} ", letters)
            }
        }
    }
}

/// Clean a raw tweet with the default [Normalizer].
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}
