use tracing::{debug, info};

use crate::keyboard::Key;
use crate::lesson::model::Lesson;
use crate::lesson::state::SessionState;
use crate::lesson::view::{LessonView, compute_view, expected_char};

/// What a key press did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Wrong key, or nothing left to type. State is unchanged.
    Ignored,
    /// Correct key, more of the part remains.
    Advanced,
    /// Correct final key of a part; the session moved to the next part.
    PartFinished,
    /// Correct final key of the last part. The index is back at the start of
    /// the last part.
    LessonFinished,
}

impl InputOutcome {
    pub fn accepted(self) -> bool {
        !matches!(self, InputOutcome::Ignored)
    }
}

/// Apply one key press. `input` is the resolved text of the key; it has to be
/// exactly the next expected character to count.
pub fn advance(lesson: &Lesson, state: &SessionState, input: &str) -> (SessionState, InputOutcome) {
    let Some(expected) = expected_char(lesson, state) else {
        return (state.clone(), InputOutcome::Ignored);
    };

    let mut chars = input.chars();
    if chars.next() != Some(expected) || chars.next().is_some() {
        debug!(?expected, input, "ignored key");
        return (state.clone(), InputOutcome::Ignored);
    }

    let mut next = state.clone();
    let part_len = lesson.part(state.part_index).map_or(0, |part| part.char_len());
    if state.index + 1 == part_len {
        let outcome = finish_part(lesson, &mut next);
        return (next, outcome);
    }

    next.index += 1;
    (next, InputOutcome::Advanced)
}

pub fn request_hint(state: &SessionState) -> SessionState {
    SessionState {
        hint: true,
        ..state.clone()
    }
}

/// Close out the current part: its words become seen, the index returns to
/// zero and the session moves on if there is another part.
pub(crate) fn finish_part(lesson: &Lesson, state: &mut SessionState) -> InputOutcome {
    if let Some(part) = lesson.part(state.part_index) {
        for word in &part.words {
            state.mark_seen(&word.source);
        }
    }
    state.index = 0;

    if state.part_index + 1 < lesson.parts.len() {
        state.part_index += 1;
        info!(part_index = state.part_index, "part finished");
        InputOutcome::PartFinished
    } else {
        info!(parts = lesson.parts.len(), "lesson finished");
        InputOutcome::LessonFinished
    }
}

/// A lesson paired with the state of one attempt at it.
#[derive(Clone, Debug)]
pub struct LessonSession {
    lesson: Lesson,
    state: SessionState,
}

impl LessonSession {
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            state: SessionState::new(),
        }
    }

    /// Continue from a snapshot. Out-of-range values are clamped.
    pub fn resume(lesson: Lesson, snapshot: SessionState) -> Self {
        let state = snapshot.clamped_to(&lesson);
        Self { lesson, state }
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Derive the current view and record any words it found fully typed.
    pub fn view(&mut self) -> LessonView {
        let pass = compute_view(&self.lesson, &self.state);
        self.state.merge_seen(&pass.seen);
        pass.view
    }

    pub fn handle_input(&mut self, key: &Key) -> InputOutcome {
        // Seen words must be recorded for the state the key was pressed against.
        self.view();
        let (next, outcome) = advance(&self.lesson, &self.state, key.resolved());
        if outcome.accepted() {
            debug!(
                index = next.index,
                part_index = next.part_index,
                ?outcome,
                "key accepted"
            );
        }
        self.state = next;
        outcome
    }

    pub fn handle_hint(&mut self) {
        self.state = request_hint(&self.state);
    }

    /// Fraction of the lesson's characters typed so far.
    pub fn progress(&self) -> f64 {
        let total = self.lesson.total_chars();
        if total == 0 {
            return 0.0;
        }
        let before: usize = self.lesson.parts[..self.state.part_index.min(self.lesson.parts.len())]
            .iter()
            .map(|part| part.char_len())
            .sum();
        (before + self.state.index) as f64 / total as f64
    }
}
