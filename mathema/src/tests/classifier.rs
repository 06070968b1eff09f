use crate::classifier::{
    classify, EXPONENTIAL_CHAPTER, FALLBACK_CHAPTER, FALLBACK_SECTION, POLYNOMIALS_CHAPTER,
    SYSTEMS_CHAPTER, TRIGONOMETRY_CHAPTER,
};
use crate::taxonomy::{Chapter, Taxonomy};
use std::collections::BTreeMap;

fn builtin() -> Taxonomy {
    Taxonomy::builtin().unwrap()
}

#[test]
fn test_system_ranks_first() {
    let matches = classify("x+y=5, x-y=1", &builtin());
    assert_eq!(matches[0].chapter, SYSTEMS_CHAPTER);
    assert_eq!(matches[0].section, "Μη Γραμμικά Συστήματα");
    assert_eq!(matches[0].section_key.as_deref(), Some("system_equations"));
    assert_eq!(matches[0].score, 1000);
}

#[test]
fn test_greek_trig_names_are_recognized() {
    let matches = classify("ημ(x)=0.5", &builtin());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].chapter, TRIGONOMETRY_CHAPTER);
    assert_eq!(matches[0].section, "Βασικές Τριγωνομετρικές Εξισώσεις");
    assert_eq!(matches[0].score, 100);
    assert_eq!(matches[0].chapter_index, Some(2));
}

#[test]
fn test_caret_power_matches_polynomials() {
    let matches = classify("x^2-5x+6=0", &builtin());
    assert_eq!(matches[0].chapter, POLYNOMIALS_CHAPTER);
    assert_eq!(matches[0].section, "Πολυωνυμικές Εξισώσεις");
}

#[test]
fn test_double_star_power_matches_polynomials() {
    let matches = classify("x**3 = 8", &builtin());
    assert_eq!(matches[0].chapter, POLYNOMIALS_CHAPTER);
}

#[test]
fn test_log_matches_exponential_chapter() {
    let matches = classify("log(x-3)=1", &builtin());
    assert_eq!(matches[0].chapter, EXPONENTIAL_CHAPTER);
    assert_eq!(matches[0].section, "Εκθετική Συνάρτηση");

    let matches = classify("ln(x)=2", &builtin());
    assert_eq!(matches[0].chapter, EXPONENTIAL_CHAPTER);
}

#[test]
fn test_rules_are_not_exclusive() {
    let matches = classify("ημ(x)=y, x^2=y", &builtin());
    let chapters: Vec<&str> = matches.iter().map(|m| m.chapter.as_str()).collect();
    assert_eq!(
        chapters,
        vec![SYSTEMS_CHAPTER, TRIGONOMETRY_CHAPTER, POLYNOMIALS_CHAPTER]
    );
}

#[test]
fn test_fallback_when_nothing_fires() {
    let matches = classify("2x+1=5", &builtin());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].chapter, FALLBACK_CHAPTER);
    assert_eq!(matches[0].section, FALLBACK_SECTION);
    assert_eq!(matches[0].section_key, None);
    assert_eq!(matches[0].chapter_index, None);
    assert_eq!(matches[0].score, 0);
}

#[test]
fn test_missing_section_uses_default_name() {
    let taxonomy = Taxonomy {
        chapters: vec![Chapter {
            title: TRIGONOMETRY_CHAPTER.to_string(),
            sections: BTreeMap::new(),
        }],
    };
    let matches = classify("συν(x)=1", &taxonomy);
    assert_eq!(matches[0].section, "Βασικές Τριγωνομετρικές Εξισώσεις");
    assert_eq!(matches[0].chapter_index, Some(0));
}

#[test]
fn test_chapter_missing_from_taxonomy_falls_back() {
    let matches = classify("συν(x)=1", &Taxonomy::default());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].chapter, FALLBACK_CHAPTER);
}

#[test]
fn test_duplicate_chapter_titles_each_match() {
    let chapter = Chapter {
        title: POLYNOMIALS_CHAPTER.to_string(),
        sections: BTreeMap::new(),
    };
    let taxonomy = Taxonomy {
        chapters: vec![chapter.clone(), chapter],
    };
    let matches = classify("x^3=1", &taxonomy);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].chapter_index, Some(0));
    assert_eq!(matches[1].chapter_index, Some(1));
}

#[test]
fn test_taxonomy_rejects_malformed_json() {
    let err = Taxonomy::from_json_str("{\"chapters\": 3}").unwrap_err();
    assert!(err.to_string().contains("Invalid taxonomy JSON"));
}
