//! Derivation of what the learner sees from a lesson and its session state.
//!
//! [`compute_view`] is pure: it never touches the state it is given. Words the
//! pass finds fully typed come back in [`ViewPass::seen`], and the caller
//! decides when to fold them into the session (see
//! [`LessonSession::view`](crate::lesson::progress::LessonSession::view)).

use crate::lesson::model::{Lesson, Word};
use crate::lesson::state::SessionState;

/// Placeholder shown for untyped characters of words the learner has typed
/// before.
pub const MASK_CHAR: char = '?';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonView {
    /// Characters of the current part already typed, no separators.
    pub done: String,
    /// Characters still to type, masked where the word was seen before, with
    /// one space between words.
    pub remaining: String,
    /// The next pending character belongs to a masked word.
    pub can_hint: bool,
    /// The session is on the last part. This does not mean the last part has
    /// been typed.
    pub is_complete: bool,
    /// Only the final character of the current part is left.
    pub is_part_complete: bool,
    /// Words of the current part that have been typed in full.
    pub words: Vec<Word>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewPass {
    pub view: LessonView,
    /// The session's seen list with this pass's fully typed words appended.
    pub seen: Vec<String>,
}

pub fn compute_view(lesson: &Lesson, state: &SessionState) -> ViewPass {
    let mut seen = state.seen.clone();
    let is_complete = lesson.parts.len().checked_sub(1) == Some(state.part_index);

    let Some(part) = lesson.part(state.part_index) else {
        return ViewPass {
            view: LessonView {
                is_complete,
                ..LessonView::default()
            },
            seen,
        };
    };

    let all_len = part.char_len();
    let mut done = String::new();
    let mut remaining = String::new();
    let mut words = Vec::new();
    let mut used_hint = false;
    let mut count = 0usize;

    for (word_idx, word) in part.words.iter().enumerate() {
        let has_seen = state.has_seen(&word.source);

        for ch in word.source.chars() {
            if count < state.index {
                done.push(ch);
            } else if !has_seen {
                remaining.push(ch);
            } else if state.hint && !used_hint {
                used_hint = true;
                remaining.push(ch);
            } else {
                remaining.push(MASK_CHAR);
            }
            count += 1;
        }

        if count <= state.index {
            words.push(word.clone());
            if !seen.contains(&word.source) {
                seen.push(word.source.clone());
            }
        }

        if word_idx + 1 < part.words.len() {
            remaining.push(' ');
        }
    }

    let can_hint = remaining.trim().starts_with(MASK_CHAR);

    ViewPass {
        view: LessonView {
            done,
            remaining,
            can_hint,
            is_complete,
            is_part_complete: all_len.checked_sub(1) == Some(state.index),
            words,
        },
        seen,
    }
}

/// The character the next key press has to match, if any.
pub fn expected_char(lesson: &Lesson, state: &SessionState) -> Option<char> {
    lesson
        .part(state.part_index)?
        .words
        .iter()
        .flat_map(|word| word.source.chars())
        .nth(state.index)
}
