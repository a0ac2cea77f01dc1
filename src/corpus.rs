use crate::error::{Result, TyperushError};
use crate::random::RandomSource;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

static PASSAGE_DIR: Dir = include_dir!("src/passages");

/// A fixed, immutable set of passages a session draws from.
///
/// Deserializing goes through the same validation as the constructors, so a
/// `Corpus` always holds at least one non-blank, space-separated passage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawCorpus")]
pub struct Corpus {
    pub name: String,
    passages: Vec<String>,
}

/// Corpus json as written on disk, before validation
#[derive(Deserialize)]
struct RawCorpus {
    name: String,
    passages: Vec<String>,
}

impl TryFrom<RawCorpus> for Corpus {
    type Error = TyperushError;

    fn try_from(raw: RawCorpus) -> Result<Self> {
        Corpus {
            name: raw.name,
            passages: raw.passages,
        }
        .validated()
    }
}

impl Corpus {
    /// The passages shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::embedded("default")
    }

    pub fn embedded(name: &str) -> Result<Self> {
        let file = PASSAGE_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| TyperushError::MissingBuiltin(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| TyperushError::MissingBuiltin(name.to_string()))?;

        Self::from_json(contents)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let corpus = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            passages = corpus.len(),
            "loaded corpus from file"
        );
        Ok(corpus)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let raw: RawCorpus = serde_json::from_str(contents)?;
        Corpus::try_from(raw)
    }

    pub fn from_passages(passages: Vec<String>) -> Result<Self> {
        Corpus {
            name: "custom".to_string(),
            passages,
        }
        .validated()
    }

    // newlines and tabs can't be typed into the field, so words only ever
    // break on plain spaces
    fn validated(mut self) -> Result<Self> {
        if self.passages.is_empty() {
            return Err(TyperushError::EmptyCorpus);
        }
        if let Some(index) = self.passages.iter().position(|p| p.trim().is_empty()) {
            return Err(TyperushError::BlankPassage { index });
        }
        for passage in &mut self.passages {
            if passage.chars().any(|c| c.is_whitespace() && c != ' ') {
                *passage = normalize_whitespace(passage);
            }
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn passages(&self) -> &[String] {
        &self.passages
    }

    /// Draw one passage uniformly through `random`
    pub fn pick(&self, random: &mut impl RandomSource) -> &str {
        let idx = random.next_index(self.passages.len());
        &self.passages[idx.min(self.passages.len() - 1)]
    }
}

fn normalize_whitespace(passage: &str) -> String {
    passage
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

/// Split a passage into words on single spaces.
///
/// Runs of spaces yield empty words; those commit on a bare delimiter.
pub fn split_words(passage: &str) -> Vec<String> {
    passage.split(' ').map(str::to_string).collect()
}
