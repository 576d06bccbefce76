//! Moses-style tokenizer.
//!
//! Follows the rules of the Moses `tokenizer.perl` script that matter for tweets:
//!
//! - pad every symbol that is not alphanumeric, a period, an apostrophe, a comma or a dash,
//! - split commas that are not inside numbers,
//! - split apostrophes following language rules (`don't` -> `don 't`, `l'homme` -> `l' homme`),
//! - split final periods unless the word is a known non-breaking prefix,
//! - escape XML special characters (`'` -> `&apos;`).
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use super::prefixes::{prefixes, Prefixes};
use super::Tokenizer;
use crate::lang::Lang;

lazy_static! {
    static ref CONTROL: Regex = Regex::new(r"[\x00-\x1F]").unwrap();
    static ref PAD_NOT_ALNUM: Regex = Regex::new(r"([^\p{L}\p{N}\s\.'`,\-])").unwrap();
    static ref MULTI_DOT: Regex = Regex::new(r"\.{2,}").unwrap();
    static ref COMMA_NOT_AFTER_NUMBER: Regex = Regex::new(r"([^\p{N}]),").unwrap();
    static ref COMMA_NOT_BEFORE_NUMBER: Regex = Regex::new(r",([^\p{N}])").unwrap();
    static ref COMMA_END: Regex = Regex::new(r"(\p{N}),$").unwrap();
    static ref FINAL_PERIOD: Regex = Regex::new(r"^(\S+)\.$").unwrap();
    static ref HAS_ALPHA: Regex = Regex::new(r"\p{L}").unwrap();
    static ref STARTS_LOWER: Regex = Regex::new(r"^\p{Ll}").unwrap();
    static ref STARTS_DIGIT: Regex = Regex::new(r"^\p{N}").unwrap();
    static ref ENGLISH_APOSTROPHES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"([^\p{L}])'([^\p{L}])").unwrap(), "$1 ' $2"),
        (Regex::new(r"([^\p{L}\p{N}])'(\p{L})").unwrap(), "$1 ' $2"),
        (Regex::new(r"(\p{L})'([^\p{L}])").unwrap(), "$1 ' $2"),
        (Regex::new(r"(\p{L})'(\p{L})").unwrap(), "$1 '$2"),
        (Regex::new(r"(\p{N})'(s)").unwrap(), "$1 '$2"),
    ];
    static ref ELISION_APOSTROPHES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"([^\p{L}])'([^\p{L}])").unwrap(), "$1 ' $2"),
        (Regex::new(r"([^\p{L}])'(\p{L})").unwrap(), "$1 ' $2"),
        (Regex::new(r"(\p{L})'([^\p{L}])").unwrap(), "$1 ' $2"),
        (Regex::new(r"(\p{L})'(\p{L})").unwrap(), "$1' $2"),
    ];
}

/// XML escapes, `&` first.
const ESCAPES: [(&str, &str); 8] = [
    ("&", "&amp;"),
    ("|", "&#124;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("'", "&apos;"),
    ("\"", "&quot;"),
    ("[", "&#91;"),
    ("]", "&#93;"),
];

#[derive(Debug, Clone, Copy)]
enum Apostrophes {
    English,
    Elision,
    Split,
}

/// Rule based tokenizer for a given language.
#[derive(Debug)]
pub struct Moses {
    apostrophes: Apostrophes,
    prefixes: &'static Prefixes,
    escape: bool,
}

impl Moses {
    pub fn new(lang: &Lang) -> Self {
        let apostrophes = if lang.primary() == "en" {
            Apostrophes::English
        } else if lang.has_elision() {
            Apostrophes::Elision
        } else {
            Apostrophes::Split
        };

        Self {
            apostrophes,
            prefixes: prefixes(lang.primary()),
            escape: true,
        }
    }

    /// Disable XML escaping.
    pub fn without_escape(mut self) -> Self {
        self.escape = false;
        self
    }

    fn split_apostrophes(&self, text: String) -> String {
        let rules: &[(Regex, &str)] = match self.apostrophes {
            Apostrophes::English => &ENGLISH_APOSTROPHES,
            Apostrophes::Elision => &ELISION_APOSTROPHES,
            Apostrophes::Split => return text.replace('\'', " ' "),
        };

        rules.iter().fold(text, |text, (re, rep)| {
            re.replace_all(&text, *rep).into_owned()
        })
    }

    /// Split final periods of words, keeping them on non-breaking prefixes.
    fn split_final_periods(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut tokens = Vec::with_capacity(words.len());

        for (idx, word) in words.iter().enumerate() {
            let next = words.get(idx + 1);
            if word.chars().all(|c| c == '.') {
                tokens.push(word.to_string());
                continue;
            }
            let prefix = match FINAL_PERIOD.captures(word) {
                Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
                None => {
                    tokens.push(word.to_string());
                    continue;
                }
            };

            let keep = (prefix.contains('.') && HAS_ALPHA.is_match(prefix))
                || self.prefixes.is_plain(prefix)
                || next.map_or(false, |n| STARTS_LOWER.is_match(n))
                || (self.prefixes.is_numeric_only(prefix)
                    && next.map_or(false, |n| STARTS_DIGIT.is_match(n)));

            if keep {
                tokens.push(word.to_string());
            } else {
                tokens.push(prefix.to_string());
                tokens.push(".".to_string());
            }
        }

        tokens
    }
}

fn escape_xml(token: &str) -> String {
    ESCAPES
        .iter()
        .fold(token.to_string(), |token, (from, to)| token.replace(from, to))
}

impl Tokenizer for Moses {
    fn tokenize(&self, text: &str) -> String {
        let text = CONTROL.replace_all(text, "");
        let text = PAD_NOT_ALNUM.replace_all(&text, " $1 ");
        let text = MULTI_DOT.replace_all(&text, " $0 ");
        let text = COMMA_NOT_AFTER_NUMBER.replace_all(&text, "$1 , ");
        let text = COMMA_NOT_BEFORE_NUMBER.replace_all(&text, " , $1");
        let text = COMMA_END.replace_all(text.trim_end(), "$1 ,");
        let text = self.split_apostrophes(text.into_owned());

        let tokens = self.split_final_periods(&text);
        if self.escape {
            tokens.iter().map(|token| escape_xml(token)).join(" ")
        } else {
            tokens.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moses(lang: &str) -> Moses {
        Moses::new(&Lang::parse(lang).unwrap())
    }

    #[test]
    fn punctuation() {
        assert_eq!(moses("en").tokenize("Hello, world!"), "Hello , world !");
        assert_eq!(moses("en").tokenize("(really?)"), "( really ? )");
    }

    #[test]
    fn numbers_keep_commas() {
        assert_eq!(moses("en").tokenize("1,000 people"), "1,000 people");
    }

    #[test]
    fn english_contractions() {
        assert_eq!(
            moses("en").tokenize("I can't go."),
            "I can &apos;t go ."
        );
        assert_eq!(
            moses("en").without_escape().tokenize("it's John's"),
            "it 's John 's"
        );
    }

    #[test]
    fn french_elision() {
        assert_eq!(
            moses("fr").without_escape().tokenize("l'homme est là."),
            "l' homme est là ."
        );
    }

    #[test]
    fn other_lang_apostrophe() {
        assert_eq!(
            moses("de").without_escape().tokenize("geht's"),
            "geht ' s"
        );
    }

    #[test]
    fn nonbreaking_prefixes() {
        assert_eq!(
            moses("en").tokenize("Mr. Smith arrived."),
            "Mr. Smith arrived ."
        );
        assert_eq!(moses("en").tokenize("see No. 5"), "see No. 5");
        assert_eq!(moses("en").tokenize("No. way"), "No. way");
        assert_eq!(moses("en").tokenize("Say No. Then"), "Say No . Then");
    }

    #[test]
    fn period_before_lowercase_kept() {
        assert_eq!(moses("en").tokenize("ok. fine"), "ok. fine");
    }

    #[test]
    fn xml_escapes() {
        assert_eq!(
            moses("en").tokenize("a < b & \"c\""),
            "a &lt; b &amp; &quot; c &quot;"
        );
    }

    #[test]
    fn dot_runs() {
        assert_eq!(moses("en").tokenize("wait...what"), "wait ... what");
    }

    #[test]
    fn trailing_dot_run() {
        assert_eq!(moses("en").tokenize("so..."), "so ...");
    }

    #[test]
    fn normalized_dots() {
        assert_eq!(moses("en").tokenize("wait . what"), "wait . what");
    }
}
