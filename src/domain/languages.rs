// Language table: abbreviation <-> full name
use crate::domain::model::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Supported languages in alphabetical order of their full names.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("sq", "albanian"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("hy", "armenian"),
    ("az", "azerbaijani"),
    ("eu", "basque"),
    ("be", "belarusian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("ny", "chichewa"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("co", "corsican"),
    ("hr", "croatian"),
    ("cs", "czech"),
    ("da", "danish"),
    ("nl", "dutch"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("et", "estonian"),
    ("tl", "filipino"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("gl", "galician"),
    ("ka", "georgian"),
    ("de", "german"),
    ("el", "greek"),
    ("gu", "gujarati"),
    ("ht", "haitian creole"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("he", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hu", "hungarian"),
    ("is", "icelandic"),
    ("ig", "igbo"),
    ("id", "indonesian"),
    ("ga", "irish"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("kn", "kannada"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("ko", "korean"),
    ("ku", "kurdish (kurmanji)"),
    ("ky", "kyrgyz"),
    ("lo", "lao"),
    ("la", "latin"),
    ("lv", "latvian"),
    ("lt", "lithuanian"),
    ("lb", "luxembourgish"),
    ("mk", "macedonian"),
    ("mg", "malagasy"),
    ("ms", "malay"),
    ("ml", "malayalam"),
    ("mt", "maltese"),
    ("mi", "maori"),
    ("mr", "marathi"),
    ("mn", "mongolian"),
    ("my", "myanmar (burmese)"),
    ("ne", "nepali"),
    ("no", "norwegian"),
    ("or", "odia"),
    ("ps", "pashto"),
    ("fa", "persian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("pa", "punjabi"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sm", "samoan"),
    ("gd", "scots gaelic"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sn", "shona"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("so", "somali"),
    ("es", "spanish"),
    ("su", "sundanese"),
    ("sw", "swahili"),
    ("sv", "swedish"),
    ("tg", "tajik"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("th", "thai"),
    ("tr", "turkish"),
    ("tk", "turkmen"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("ug", "uyghur"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("cy", "welsh"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zu", "zulu"),
];

/// Google Translate front-end hosts. Informational; no operation reads them.
pub const DEFAULT_SERVICE_URLS: &[&str] = &[
    "translate.google.com",
    "translate.google.ac",
    "translate.google.ad",
    "translate.google.ae",
    "translate.google.al",
    "translate.google.am",
    "translate.google.as",
    "translate.google.at",
    "translate.google.az",
    "translate.google.ba",
    "translate.google.be",
    "translate.google.bg",
    "translate.google.by",
    "translate.google.ca",
    "translate.google.cd",
    "translate.google.ch",
    "translate.google.cl",
    "translate.google.cm",
    "translate.google.co.uk",
    "translate.google.cz",
    "translate.google.de",
    "translate.google.dk",
    "translate.google.es",
    "translate.google.fi",
    "translate.google.fr",
    "translate.google.ie",
    "translate.google.it",
    "translate.google.nl",
    "translate.google.no",
    "translate.google.pl",
    "translate.google.pt",
    "translate.google.se",
    "translate.googleapis.com",
];

static GLOBAL: Lazy<LanguageTable> = Lazy::new(|| LanguageTable::from_pairs(LANGUAGES));

/// Bidirectional lookup between language abbreviations and full names.
///
/// Both orderings follow the dataset, so `abbreviations()[i]` is the code of
/// `names()[i]`.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    abbreviations: Vec<&'static str>,
    names: Vec<&'static str>,
    by_abbreviation: HashMap<&'static str, &'static str>,
    by_name: HashMap<&'static str, &'static str>,
}

impl LanguageTable {
    /// The table built from [`LANGUAGES`].
    pub fn global() -> &'static LanguageTable {
        &GLOBAL
    }

    /// Later duplicates of an abbreviation or a name are ignored, keeping the
    /// two directions exact inverses.
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut table = Self {
            abbreviations: Vec::with_capacity(pairs.len()),
            names: Vec::with_capacity(pairs.len()),
            by_abbreviation: HashMap::with_capacity(pairs.len()),
            by_name: HashMap::with_capacity(pairs.len()),
        };

        for &(abbreviation, name) in pairs {
            if table.by_abbreviation.contains_key(abbreviation) || table.by_name.contains_key(name)
            {
                continue;
            }
            table.abbreviations.push(abbreviation);
            table.names.push(name);
            table.by_abbreviation.insert(abbreviation, name);
            table.by_name.insert(name, abbreviation);
        }

        table
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn abbreviations(&self) -> &[&'static str] {
        &self.abbreviations
    }

    pub fn name_for(&self, abbreviation: &str) -> Option<&'static str> {
        self.by_abbreviation.get(abbreviation).copied()
    }

    pub fn abbreviation_for(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).copied()
    }

    pub fn is_known_abbreviation(&self, abbreviation: &str) -> bool {
        self.by_abbreviation.contains_key(abbreviation)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.abbreviations
            .iter()
            .zip(self.names.iter())
            .map(|(abbreviation, name)| Language {
                abbreviation: abbreviation.to_string(),
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }
}
