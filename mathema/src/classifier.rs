//! Chapter classifier
//!
//! Ranks curriculum sections for a query with a fixed table of keyword rules.
//! Rules are not exclusive: a trigonometric system matches both the systems
//! chapter and the trigonometry chapter. The result is never empty; when no
//! rule fires a zero-score fallback entry is returned.

use crate::normalizer::{normalize, split_clauses};
use crate::taxonomy::{Section, Taxonomy};
use serde::Serialize;
use tracing::debug;

pub const SYSTEMS_CHAPTER: &str = "Κεφάλαιο 1 – Συστήματα";
pub const TRIGONOMETRY_CHAPTER: &str = "Κεφάλαιο 3 – Τριγωνομετρία";
pub const POLYNOMIALS_CHAPTER: &str = "Κεφάλαιο 4 – Πολυώνυμα";
pub const EXPONENTIAL_CHAPTER: &str = "Κεφάλαιο 5 – Εκθετική και Λογαριθμική Συνάρτηση";

pub const FALLBACK_CHAPTER: &str = "Παλαιότερη ύλη";
pub const FALLBACK_SECTION: &str = "Ύλη προηγούμενων τάξεων";

const TRIG_CALLS: [&str; 4] = ["sin(", "cos(", "tan(", "cot("];

/// What a rule looks for in the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    /// More than one comma-separated equation
    MultipleClauses,
    /// A call to sin, cos, tan or cot
    TrigCall,
    /// A power written with `^` (or `**` after normalization)
    Power,
    /// Any mention of `log`
    Logarithm,
}

struct ClassificationRule {
    trigger: Trigger,
    chapter: &'static str,
    section_key: &'static str,
    default_section: &'static str,
    score: u32,
}

const RULES: [ClassificationRule; 4] = [
    ClassificationRule {
        trigger: Trigger::MultipleClauses,
        chapter: SYSTEMS_CHAPTER,
        section_key: "system_equations",
        default_section: "Συστήματα",
        score: 1000,
    },
    ClassificationRule {
        trigger: Trigger::TrigCall,
        chapter: TRIGONOMETRY_CHAPTER,
        section_key: "trig_equations",
        default_section: "Βασικές Τριγωνομετρικές Εξισώσεις",
        score: 100,
    },
    ClassificationRule {
        trigger: Trigger::Power,
        chapter: POLYNOMIALS_CHAPTER,
        section_key: "polynomial_equations",
        default_section: "Πολυωνυμικές Εξισώσεις",
        score: 100,
    },
    ClassificationRule {
        trigger: Trigger::Logarithm,
        chapter: EXPONENTIAL_CHAPTER,
        section_key: "exponential_function",
        default_section: "Λογάριθμοι",
        score: 100,
    },
];

/// One candidate curriculum location for a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterMatch {
    pub chapter: String,
    pub section: String,
    /// Key of the section in the taxonomy; `None` for the fallback entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_key: Option<String>,
    /// Position of the chapter record in the taxonomy; `None` for the fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_index: Option<usize>,
    pub score: u32,
}

impl ChapterMatch {
    fn fallback() -> Self {
        Self {
            chapter: FALLBACK_CHAPTER.to_string(),
            section: FALLBACK_SECTION.to_string(),
            section_key: None,
            chapter_index: None,
            score: 0,
        }
    }
}

struct Signals<'a> {
    raw: &'a str,
    normalized_lower: String,
}

impl Signals<'_> {
    fn fires(&self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::MultipleClauses => split_clauses(self.raw).len() > 1,
            Trigger::TrigCall => TRIG_CALLS
                .iter()
                .any(|call| self.normalized_lower.contains(call)),
            Trigger::Power => self.raw.contains('^') || self.normalized_lower.contains("**"),
            Trigger::Logarithm => self.normalized_lower.contains("log"),
        }
    }
}

/// Rank candidate chapters for the raw query, highest score first
pub fn classify(input: &str, taxonomy: &Taxonomy) -> Vec<ChapterMatch> {
    let signals = Signals {
        raw: input,
        normalized_lower: normalize(input).to_lowercase(),
    };

    let mut matches = Vec::new();
    for rule in RULES.iter().filter(|rule| signals.fires(rule.trigger)) {
        debug!(trigger = ?rule.trigger, chapter = rule.chapter, "classification rule fired");
        for (index, chapter) in taxonomy.chapters_titled(rule.chapter) {
            let section = chapter
                .sections
                .get(rule.section_key)
                .cloned()
                .unwrap_or_else(|| Section::named(rule.default_section));
            matches.push(ChapterMatch {
                chapter: chapter.title.clone(),
                section: section.name,
                section_key: Some(rule.section_key.to_string()),
                chapter_index: Some(index),
                score: rule.score,
            });
        }
    }

    if matches.is_empty() {
        matches.push(ChapterMatch::fallback());
    }

    // Stable: equal scores keep rule order
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
