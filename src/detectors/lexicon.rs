//! Shared lexicons and word-boundary matching for fallacy rules
//!
//! Every list here is fixed: identical input must produce identical
//! findings, so rules never learn or mutate terms at runtime. Config can
//! extend a list per engine instance, never replace it.
//!
//! A term ending in `*` is a stem and matches any word-character suffix
//! ("exaggerat*" covers exaggerate, exaggerated, exaggerating). Spaces
//! inside a term match any whitespace run.

use regex::Regex;
use std::sync::OnceLock;

/// Personal-attack vocabulary for the ad hominem rule.
pub const ATTACK_TERMS: &[&str] = &[
    "stupid",
    "idiot",
    "idiotic",
    "fool",
    "foolish",
    "moron",
    "incompetent",
    "dishonest",
    "liar",
    "corrupt",
    "hypocrite",
    "ignorant",
    "pathetic",
    "clueless",
];

/// Universal quantifiers that signal sweeping generalization.
pub const UNIVERSAL_QUANTIFIERS: &[&str] = &[
    "all",
    "every",
    "always",
    "never",
    "none",
    "no one",
    "everyone",
    "everybody",
    "nobody",
];

/// Emotionally loaded vocabulary for the appeal-to-emotion rule.
pub const EMOTION_TERMS: &[&str] = &[
    "terrible",
    "horrible",
    "awful",
    "devastating",
    "heartbreaking",
    "outrageous",
    "disgusting",
    "frightening",
    "terrifying",
    "shameful",
    "tragic",
    "catastrophic",
    "disaster",
    "nightmare",
    "horrifying",
    "appalling",
];

/// Markers that indicate factual or evidentiary grounding.
pub const EVIDENCE_MARKERS: &[&str] = &[
    "research",
    "study",
    "studies",
    "data",
    "evidence",
    "statistics",
    "percent",
    "survey",
];

/// Authority figures cited in place of evidence.
pub const AUTHORITY_TERMS: &[&str] = &[
    "expert",
    "experts",
    "professor",
    "doctor",
    "scientist",
    "scientists",
    "authority",
    "authorities",
    "specialist",
];

/// Chained-consequence markers for the slippery-slope rule.
pub const CONSEQUENCE_MARKERS: &[&str] = &[
    "lead to",
    "leads to",
    "next thing",
    "first step",
    "eventually",
    "ultimately",
    "before you know it",
];

/// Extreme-outcome vocabulary for the slippery-slope rule.
pub const EXTREMITY_TERMS: &[&str] = &[
    "all",
    "every",
    "no",
    "none",
    "nothing",
    "everything",
    "collapse",
    "destroy",
    "ruin",
    "chaos",
];

/// Phrases that signal a misrepresented opposing position.
pub const MISREPRESENTATION_MARKERS: &[&str] = &[
    "not what",
    "never said",
    "didn't say",
    "misrepresent*",
    "exaggerat*",
    "twisting my words",
    "putting words",
];

/// Compile a case-insensitive, word-boundary alternation over terms.
pub fn term_regex(terms: &[&str]) -> Regex {
    compile(terms.iter().copied())
}

/// Same as [`term_regex`] with config-supplied extra terms appended.
/// Extras use the same `*` stem convention.
pub fn term_regex_with_extras(terms: &[&str], extras: &[String]) -> Regex {
    compile(terms.iter().copied().chain(extras.iter().map(String::as_str)))
}

fn compile<'a>(terms: impl Iterator<Item = &'a str>) -> Regex {
    let alternatives: Vec<String> = terms.map(alternative).collect();
    let pattern = format!("(?i)(?:{})", alternatives.join("|"));
    // Terms are escaped, so the pattern always compiles.
    Regex::new(&pattern).unwrap()
}

fn alternative(term: &str) -> String {
    let (body, stem) = match term.strip_suffix('*') {
        Some(body) => (body, true),
        None => (term, false),
    };
    let escaped = regex::escape(body).replace(' ', r"\s+");
    if stem {
        format!(r"\b{escaped}\w*")
    } else {
        format!(r"\b{escaped}\b")
    }
}

static ATTACK_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn attack_pattern() -> &'static Regex {
    ATTACK_PATTERN.get_or_init(|| term_regex(ATTACK_TERMS))
}

static QUANTIFIER_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn quantifier_pattern() -> &'static Regex {
    QUANTIFIER_PATTERN.get_or_init(|| term_regex(UNIVERSAL_QUANTIFIERS))
}

static EMOTION_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn emotion_pattern() -> &'static Regex {
    EMOTION_PATTERN.get_or_init(|| term_regex(EMOTION_TERMS))
}

static EVIDENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn evidence_pattern() -> &'static Regex {
    EVIDENCE_PATTERN.get_or_init(|| term_regex(EVIDENCE_MARKERS))
}

static AUTHORITY_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn authority_pattern() -> &'static Regex {
    AUTHORITY_PATTERN.get_or_init(|| term_regex(AUTHORITY_TERMS))
}

static CONSEQUENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn consequence_pattern() -> &'static Regex {
    CONSEQUENCE_PATTERN.get_or_init(|| term_regex(CONSEQUENCE_MARKERS))
}

static EXTREMITY_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn extremity_pattern() -> &'static Regex {
    EXTREMITY_PATTERN.get_or_init(|| term_regex(EXTREMITY_TERMS))
}

static MISREPRESENTATION_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn misrepresentation_pattern() -> &'static Regex {
    MISREPRESENTATION_PATTERN.get_or_init(|| term_regex(MISREPRESENTATION_MARKERS))
}

/// First lexicon term matched in `text`, lowercased for templates.
pub fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().to_lowercase())
}
