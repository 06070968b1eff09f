//! Curriculum taxonomy
//!
//! Chapters and their keyed sections, read from a JSON document of the form
//! `{ "chapters": [ { "chapter": title, "sections": { key: { "name": ... } } } ] }`.
//! The taxonomy is loaded once and handed to the [`Engine`](crate::Engine).

use crate::error::MathemaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_TAXONOMY: &str = include_str!("../theory.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "chapter")]
    pub title: String,
    #[serde(default)]
    pub sections: BTreeMap<String, Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theory: Option<serde_json::Value>,
}

impl Section {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theory: None,
        }
    }
}

impl Taxonomy {
    pub fn from_json_str(json: &str) -> Result<Self, MathemaError> {
        serde_json::from_str(json)
            .map_err(|e| MathemaError::Taxonomy(format!("Invalid taxonomy JSON: {}", e)))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MathemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            MathemaError::Taxonomy(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// The taxonomy shipped with the engine
    pub fn builtin() -> Result<Self, MathemaError> {
        Self::from_json_str(BUILTIN_TAXONOMY)
    }

    /// Chapters whose title equals `title`, with their positions
    pub fn chapters_titled<'a>(
        &'a self,
        title: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Chapter)> + 'a {
        self.chapters
            .iter()
            .enumerate()
            .filter(move |(_, chapter)| chapter.title == title)
    }
}
