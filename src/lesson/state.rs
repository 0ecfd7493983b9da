use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::lesson::model::Lesson;
use crate::lesson::progress::finish_part;

/// Mutable progress through one lesson attempt. This is also the snapshot
/// shape used to resume an attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Characters of the current part's flattened target already typed.
    #[serde(default)]
    pub index: usize,
    #[serde(default, alias = "partIndex")]
    pub part_index: usize,
    #[serde(default)]
    pub hint: bool,
    /// Word sources typed at least once, in the order they were first typed.
    #[serde(default)]
    pub seen: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_seen(&self, source: &str) -> bool {
        self.seen.iter().any(|s| s == source)
    }

    /// Returns true if the source was not seen before.
    pub fn mark_seen(&mut self, source: &str) -> bool {
        if self.has_seen(source) {
            return false;
        }
        self.seen.push(source.to_string());
        true
    }

    /// Apply a `seen` list produced by a view pass. Entries only ever get
    /// added, so a stale list can't undo newer progress.
    pub fn merge_seen(&mut self, seen: &[String]) {
        for source in seen {
            self.mark_seen(source);
        }
    }

    /// Bring an externally supplied snapshot back inside the lesson's bounds.
    pub fn clamped_to(mut self, lesson: &Lesson) -> Self {
        let last_part = lesson.last_part_index();
        if self.part_index > last_part {
            warn!(
                part_index = self.part_index,
                last_part, "snapshot part index out of range, clamping"
            );
            self.part_index = last_part;
        }

        let part_len = lesson
            .part(self.part_index)
            .map(|part| part.char_len())
            .unwrap_or(0);
        if self.index > part_len {
            warn!(
                index = self.index,
                part_len, "snapshot index beyond part length, clamping"
            );
            self.index = part_len;
        }
        if part_len > 0 && self.index == part_len {
            // Typed to the end but never advanced; nothing would match.
            finish_part(lesson, &mut self);
        }

        let before = self.seen.len();
        let mut deduped = Vec::with_capacity(before);
        for source in self.seen {
            if !deduped.contains(&source) {
                deduped.push(source);
            }
        }
        if deduped.len() != before {
            warn!(
                dropped = before - deduped.len(),
                "snapshot had duplicate seen words"
            );
        }
        self.seen = deduped;
        self
    }
}
