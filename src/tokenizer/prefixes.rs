//! Non-breaking prefixes.
//!
//! A word followed by a period that is found here keeps its period (`Mr.`, `etc.`).
//! Numeric-only prefixes keep it only when followed by a number (`No. 5`).
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

/// Prefixes of a given language.
#[derive(Debug, Default)]
pub struct Prefixes {
    plain: HashSet<&'static str>,
    numeric_only: HashSet<&'static str>,
}

impl Prefixes {
    fn new(plain: &[&'static str], numeric_only: &[&'static str]) -> Self {
        Self {
            plain: plain.iter().copied().collect(),
            numeric_only: numeric_only.iter().copied().collect(),
        }
    }

    pub fn is_plain(&self, word: &str) -> bool {
        self.plain.contains(word)
    }

    pub fn is_numeric_only(&self, word: &str) -> bool {
        self.numeric_only.contains(word)
    }
}

/// single uppercase letters are initials in every latin-script language
const INITIALS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

lazy_static! {
    static ref EMPTY: Prefixes = Prefixes::default();
    static ref PREFIXES: HashMap<&'static str, Prefixes> = {
        let mut m = HashMap::new();
        m.insert(
            "en",
            Prefixes::new(
                &[
                    &INITIALS[..],
                    &[
                        "Adj", "Adm", "Adv", "Asst", "Bart", "Bldg", "Brig", "Bros", "Capt",
                        "Cmdr", "Col", "Comdr", "Con", "Corp", "Cpl", "DR", "Dr", "Drs", "Ens",
                        "Gen", "Gov", "Hon", "Hr", "Hosp", "Insp", "Lt", "MM", "MR", "MRS", "MS",
                        "Maj", "Messrs", "Mlle", "Mme", "Mr", "Mrs", "Ms", "Msgr", "Op", "Ord",
                        "Pfc", "Ph", "Prof", "Pvt", "Rep", "Reps", "Res", "Rev", "Rt", "Sen",
                        "Sens", "Sfc", "Sgt", "Sr", "St", "Supt", "Surg", "v", "vs", "i.e",
                        "rev", "e.g", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep",
                        "Oct", "Nov", "Dec", "etc", "Inc", "Ltd", "Jr",
                    ][..],
                ]
                .concat(),
                &["No", "Nos", "Art", "Nr", "pp"],
            ),
        );
        m.insert(
            "fr",
            Prefixes::new(
                &[
                    &INITIALS[..],
                    &[
                        "M", "MM", "Mme", "Mmes", "Mlle", "Mlles", "Dr", "Pr", "St", "Ste",
                        "av", "bd", "cf", "chap", "etc", "ex", "fig", "hab", "janv", "févr",
                        "avr", "juil", "sept", "oct", "nov", "déc", "p", "pp", "vol",
                    ][..],
                ]
                .concat(),
                &["n", "no", "nos"],
            ),
        );
        m.insert(
            "de",
            Prefixes::new(
                &[
                    &INITIALS[..],
                    &[
                        "Abs", "Abt", "Bd", "Bsp", "bzw", "ca", "Dr", "etc", "evtl", "ggf",
                        "Hr", "Hrn", "inkl", "Jh", "Jr", "Nr", "Prof", "Str", "usw", "vgl",
                        "z.B", "d.h", "u.a",
                    ][..],
                ]
                .concat(),
                &["Art", "Nr"],
            ),
        );
        m.insert(
            "es",
            Prefixes::new(
                &[
                    &INITIALS[..],
                    &[
                        "Dr", "Dra", "Sr", "Sra", "Srta", "Ud", "Uds", "Vd", "Vds", "etc",
                        "pág", "págs", "aprox", "tel",
                    ][..],
                ]
                .concat(),
                &["No", "núm"],
            ),
        );
        m.insert(
            "it",
            Prefixes::new(
                &[
                    &INITIALS[..],
                    &[
                        "Dott", "Dr", "Geom", "Ing", "Prof", "Sig", "Sigg", "Sig.ra", "ecc",
                        "pag", "pagg", "ca", "tel",
                    ][..],
                ]
                .concat(),
                &["n", "nr", "No"],
            ),
        );
        m.insert(
            "pt",
            Prefixes::new(
                &[
                    &INITIALS[..],
                    &["Dr", "Dra", "Sr", "Sra", "Srta", "Exmo", "Exma", "etc", "pág", "tel"][..],
                ]
                .concat(),
                &["No", "Nº", "nº", "n"],
            ),
        );
        m.insert(
            "nl",
            Prefixes::new(
                &[
                    &INITIALS[..],
                    &["bijv", "dhr", "dr", "drs", "ir", "mevr", "mr", "prof", "blz", "enz", "o.a"][..],
                ]
                .concat(),
                &["nr", "Nr"],
            ),
        );
        m
    };
}

/// Get prefixes for a given (primary) language subtag.
///
/// Unknown languages get an empty list.
pub fn prefixes(lang: &str) -> &'static Prefixes {
    PREFIXES.get(lang).unwrap_or(&*EMPTY)
}
