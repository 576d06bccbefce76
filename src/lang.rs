//! Language codes.
//!
//! The language code given on the command line is used twice:
//! verbatim to name output folders and files, and through its primary subtag
//! to pick tokenization rules.
use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use oxilangtag::LanguageTag;

use crate::error::Error;

lazy_static! {
    /// Langs that use French/Italian style elision (`l'homme` -> `l' homme`).
    pub static ref ELISION_LANGS: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("fr");
        m.insert("it");
        m.insert("ga");
        m.insert("ca");
        m
    };
}

/// A validated language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lang {
    code: String,
    primary: String,
}

impl Lang {
    /// Parse a BCP-47 language tag (`en`, `fr`, `pt-BR`...).
    pub fn parse(code: &str) -> Result<Self, Error> {
        let tag = LanguageTag::parse(code.to_string())
            .map_err(|e| Error::InvalidLang(format!("{} ({})", code, e)))?;
        Ok(Self {
            primary: tag.primary_language().to_lowercase(),
            code: code.to_string(),
        })
    }

    /// Code as provided, used for naming.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Lowercased primary language subtag.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn has_elision(&self) -> bool {
        ELISION_LANGS.contains(self.primary())
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
