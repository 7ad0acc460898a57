//! Stopword filtering for candidate and query tokenization.
//!
//! This module provides per-language stopword sets combining:
//! - Curated lists for German, English, French, Spanish and Russian
//! - Optionally, the Stopwords ISO lists from the `stop-words` crate
//! - Extra words supplied through configuration
//!
//! Every word is folded with the same lowercase and mark-stripping pass the
//! tokenizer applies, so "für" in a list matches the token "fur".

use std::collections::HashSet;

use stop_words::LANGUAGE;
use wr_config::{StopwordSettings, StopwordSource};

use crate::{Language, tokenize::fold};

/// A stopword filter for a single language.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored folded.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    /// Folded stopwords.
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates an empty filter that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the curated filter for a language.
    pub fn curated(language: Language) -> Self {
        let mut stopwords = Self::empty();
        stopwords.extend(curated_list(language).iter().copied());
        stopwords
    }

    /// Builds the filter for a language code according to configuration.
    ///
    /// Codes without a curated list only receive configured extra words, which is
    /// usually nothing at all.
    pub fn for_code(code: &str, settings: &StopwordSettings) -> Self {
        let code = code.trim().to_lowercase();
        let mut stopwords = Self::empty();

        if let Some(language) = Language::from_code(&code) {
            stopwords.extend(curated_list(language).iter().copied());
            if settings.source == StopwordSource::Iso {
                stopwords.extend(stop_words::get(iso_language(language)).iter().copied());
            }
        }

        if let Some(extra) = settings.extra.get(&code) {
            stopwords.extend(extra.iter().map(String::as_str));
        }

        stopwords
    }

    /// Adds words to the filter, folding each one.
    fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            let folded = fold(word);
            if !folded.is_empty() {
                self.words.insert(folded);
            }
        }
    }

    /// Checks if an already folded token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the filter removes nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Maps a language to its Stopwords ISO list.
fn iso_language(language: Language) -> LANGUAGE {
    match language {
        Language::German => LANGUAGE::German,
        Language::English => LANGUAGE::English,
        Language::French => LANGUAGE::French,
        Language::Spanish => LANGUAGE::Spanish,
        Language::Russian => LANGUAGE::Russian,
    }
}

/// Returns the curated list for a language.
///
/// Only words of three or more letters are listed; shorter tokens never reach the
/// stopword check.
fn curated_list(language: Language) -> &'static [&'static str] {
    match language {
        Language::German => GERMAN,
        Language::English => ENGLISH,
        Language::French => FRENCH,
        Language::Spanish => SPANISH,
        Language::Russian => RUSSIAN,
    }
}

/// Curated German stopwords.
static GERMAN: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "ander", "andere",
    "anderem", "anderen", "anderer", "anderes", "anderm", "andern", "anderr", "auch", "auf",
    "aus", "bei", "bin", "bis", "bist", "dadurch", "daher", "darum", "das", "dass", "daß",
    "dein", "deine", "deinem", "deinen", "deiner", "deines", "dem", "den", "der", "des",
    "deshalb", "dessen", "die", "dies", "diese", "diesem", "diesen", "dieser", "dieses", "doch",
    "dort", "durch", "ein", "eine", "einem", "einen", "einer", "eines", "euer", "eure", "eurem",
    "euren", "eurer", "eures", "für", "hatte", "hatten", "hattest", "hattet", "hier", "hinter",
    "ich", "ihm", "ihn", "ihnen", "ihr", "ihre", "ihrem", "ihren", "ihrer", "ihres", "ist",
    "jedem", "jeden", "jeder", "jedes", "jener", "jenes", "jetzt", "kann", "kein", "keine",
    "keinem", "keinen", "keiner", "keines", "können", "könnt", "machen", "mein", "meine",
    "meinem", "meinen", "meiner", "meines", "mit", "muss", "musst", "müssen", "müsst", "nach",
    "nachdem", "nein", "nicht", "noch", "nun", "nur", "oder", "ohne", "sehr", "sein", "seine",
    "seinem", "seinen", "seiner", "seines", "sie", "sind", "tage", "und", "unser", "unsere",
    "unserem", "unseren", "unserer", "unseres", "unter", "viel", "vom", "von", "vor", "wann",
    "warum", "was", "weg", "weil", "weiter", "welche", "welcher", "welches", "wenn", "wer",
    "werd", "werde", "werden", "werdet", "wurde", "wurden", "zum", "zur", "zwischen",
];

/// Curated English stopwords.
static ENGLISH: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "and", "any", "are", "because",
    "been", "before", "being", "below", "between", "both", "but", "cannot", "could", "did",
    "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "her", "here", "hers", "herself", "him", "himself", "his", "how", "into",
    "its", "itself", "more", "most", "myself", "nor", "not", "off", "once", "only", "other",
    "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "too", "under", "until", "very", "was", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "with", "would", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Curated French stopwords.
static FRENCH: &[&str] = &[
    "aux", "avec", "ces", "dans", "des", "elle", "elles", "eux", "ils", "les", "leur", "leurs",
    "mais", "mes", "moi", "mon", "même", "nos", "notre", "nous", "par", "pas", "pour", "que",
    "qui", "ses", "son", "sur", "tes", "toi", "ton", "une", "vos", "votre", "vous", "étant",
    "étante", "été", "étée", "étées", "étés",
];

/// Curated Spanish stopwords.
static SPANISH: &[&str] = &[
    "alguna", "algunas", "alguno", "algunos", "algún", "ambos", "ante", "antes", "atras",
    "cada", "como", "conseguimos", "conseguir", "conseguirán", "consigo", "consigue",
    "consigues", "desde", "ellas", "ello", "ellos", "eres", "esta", "estaba", "estado",
    "estais", "estamos", "estoy", "están", "fin", "fue", "fueron", "fui", "fuimos", "haber",
    "hace", "hacen", "hacer", "haces", "han", "has", "hemos", "incluso", "las", "los", "menos",
    "mucho", "muchos", "muy", "nada", "nos", "nosotros", "otra", "otras", "otro", "otros",
    "para", "pero", "podemos", "poder", "podría", "podéis", "por", "porque", "primero", "puede",
    "pueden", "puedo", "qué", "sea", "ser", "sido", "siendo", "sobre", "sois", "somos", "soy",
    "sus", "suyo", "suyos", "también", "tenemos", "tener", "tengo", "tiene", "tienen", "todo",
    "tras", "tus", "tuyo", "tuyos", "una", "unas", "uno", "unos", "vos", "vosotros",
];

/// Curated Russian stopwords.
static RUSSIAN: &[&str] = &[
    "без", "более", "будто", "был", "была", "было", "быть", "вам", "вас", "вдруг", "ведь",
    "вот", "все", "всегда", "всю", "где", "даже", "для", "его", "ему", "если", "есть", "еще",
    "или", "иногда", "как", "когда", "конечно", "лучше", "между", "меня", "мне", "может",
    "надо", "него", "ней", "нельзя", "нет", "нибудь", "ничего", "она", "они", "опять", "перед",
    "потом", "сам", "себя", "так", "такой", "там", "тебя", "теперь", "только", "том", "тут",
    "уже", "чем", "что", "чтоб", "чуть",
];
