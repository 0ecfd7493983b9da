use icu_normalizer::ComposingNormalizerBorrowed;
use serde::{Deserialize, Serialize};

use crate::lesson::error::LessonError;

/// A single target word. `source` is what the learner types; `output` is an
/// alternate display form that only the renderer looks at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Word {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            output: None,
        }
    }

    pub fn with_output(source: &str, output: &str) -> Self {
        Self {
            source: source.to_string(),
            output: Some(output.to_string()),
        }
    }

    /// Text a renderer should show for this word once it has been typed.
    pub fn display(&self) -> &str {
        match self.output.as_deref() {
            Some(out) if !out.is_empty() => out,
            _ => &self.source,
        }
    }

    fn normalized(self) -> Self {
        let nfc = ComposingNormalizerBorrowed::new_nfc();
        Self {
            source: nfc.normalize(&self.source).into_owned(),
            output: self.output.map(|out| nfc.normalize(&out).into_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPart {
    pub words: Vec<Word>,
}

impl LessonPart {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Shorthand for a part whose words have no alternate output.
    pub fn from_sources(sources: &[&str]) -> Self {
        Self {
            words: sources.iter().map(|s| Word::new(s)).collect(),
        }
    }

    /// Word sources joined with no separator. This is the string key presses
    /// are matched against.
    pub fn flattened(&self) -> Vec<char> {
        self.words
            .iter()
            .flat_map(|word| word.source.chars())
            .collect()
    }

    pub fn char_len(&self) -> usize {
        self.words.iter().map(|word| word.source.chars().count()).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub parts: Vec<LessonPart>,
}

impl Lesson {
    /// Build a lesson, rejecting empty parts and words. Text is normalised to
    /// NFC so that it compares equal to what a keyboard emits.
    pub fn new(parts: Vec<LessonPart>) -> Result<Self, LessonError> {
        Self {
            title: None,
            parts,
        }
        .into_validated()
    }

    pub fn from_json(json: &str) -> Result<Self, LessonError> {
        let lesson: Lesson = serde_json::from_str(json)?;
        lesson.into_validated()
    }

    pub fn part(&self, part_index: usize) -> Option<&LessonPart> {
        self.parts.get(part_index)
    }

    pub fn last_part_index(&self) -> usize {
        self.parts.len().saturating_sub(1)
    }

    pub fn total_chars(&self) -> usize {
        self.parts.iter().map(LessonPart::char_len).sum()
    }

    fn into_validated(self) -> Result<Self, LessonError> {
        if self.parts.is_empty() {
            return Err(LessonError::NoParts);
        }
        for (part_idx, part) in self.parts.iter().enumerate() {
            if part.words.is_empty() {
                return Err(LessonError::EmptyPart { part: part_idx });
            }
            if let Some(word_idx) = part.words.iter().position(|w| w.source.is_empty()) {
                return Err(LessonError::EmptyWord {
                    part: part_idx,
                    word: word_idx,
                });
            }
        }

        Ok(Self {
            title: self.title,
            parts: self
                .parts
                .into_iter()
                .map(|part| LessonPart {
                    words: part.words.into_iter().map(Word::normalized).collect(),
                })
                .collect(),
        })
    }
}
