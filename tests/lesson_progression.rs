use levelup::keyboard::Key;
use levelup::lesson::catalog;
use levelup::lesson::{
    InputOutcome, Lesson, LessonPart, LessonSession, SessionState, Word, advance, compute_view,
    request_hint,
};

fn two_part_lesson() -> Lesson {
    Lesson::new(vec![
        LessonPart::from_sources(&["a", "bc"]),
        LessonPart::from_sources(&["a", "b"]),
    ])
    .unwrap()
}

fn type_str(session: &mut LessonSession, text: &str) {
    for ch in text.chars() {
        session.handle_input(&Key::from_char(ch));
    }
}

#[test]
fn fresh_session_shows_whole_part() {
    let mut session = LessonSession::new(two_part_lesson());
    let view = session.view();
    assert_eq!(view.done, "");
    assert_eq!(view.remaining, "a bc");
    assert!(!view.can_hint);
    assert!(!view.is_complete);
    assert!(!view.is_part_complete);
}

#[test]
fn correct_key_moves_one_character() {
    let mut session = LessonSession::new(two_part_lesson());
    assert_eq!(
        session.handle_input(&Key::from_char('a')),
        InputOutcome::Advanced
    );
    let view = session.view();
    assert_eq!(view.done, "a");
    assert_eq!(view.remaining, " bc");
    assert!(!view.is_complete);
    assert!(!view.is_part_complete);
}

#[test]
fn wrong_key_changes_nothing() {
    let mut session = LessonSession::new(two_part_lesson());
    let before = session.snapshot();
    assert_eq!(
        session.handle_input(&Key::from_char('x')),
        InputOutcome::Ignored
    );
    assert_eq!(session.snapshot(), before);
    let view = session.view();
    assert_eq!(view.done, "");
    assert_eq!(view.remaining, "a bc");
}

#[test]
fn finishing_a_part_masks_words_seen_before() {
    let mut session = LessonSession::new(two_part_lesson());
    type_str(&mut session, "abc");
    assert_eq!(session.state().part_index, 1);
    assert_eq!(session.state().index, 0);

    let view = session.view();
    assert_eq!(view.done, "");
    assert_eq!(view.remaining, "? b");
    assert!(view.can_hint);
    assert!(view.is_complete);
}

#[test]
fn hint_reveals_and_keeps_revealing() {
    let mut session = LessonSession::new(two_part_lesson());
    type_str(&mut session, "abc");
    assert_eq!(session.view().remaining, "? b");

    session.handle_hint();
    assert_eq!(session.view().remaining, "a b");
    assert_eq!(session.view().remaining, "a b");
    assert!(!session.view().can_hint);
}

#[test]
fn repeated_views_are_identical() {
    let mut session = LessonSession::new(two_part_lesson());
    type_str(&mut session, "ab");
    let first = session.view();
    let state = session.snapshot();
    let second = session.view();
    assert_eq!(first, second);
    assert_eq!(session.snapshot(), state);
}

#[test]
fn is_complete_tracks_last_part_not_typing() {
    let lesson = two_part_lesson();
    let on_last = SessionState {
        part_index: 1,
        ..SessionState::default()
    };
    let view = compute_view(&lesson, &on_last).view;
    assert!(view.is_complete);
    assert_eq!(view.done, "");
}

#[test]
fn finishing_last_part_restarts_it() {
    let mut session = LessonSession::new(two_part_lesson());
    type_str(&mut session, "abca");
    assert_eq!(
        session.handle_input(&Key::from_char('b')),
        InputOutcome::LessonFinished
    );
    assert_eq!(session.state().part_index, 1);
    assert_eq!(session.state().index, 0);
    // Both words of the last part were typed, so the whole part is masked now.
    assert_eq!(session.view().remaining, "? ?");
}

#[test]
fn key_output_overrides_main_label() {
    let lesson = Lesson::new(vec![LessonPart::new(vec![Word::new("\u{0e01}\u{0e34}")])]).unwrap();
    let mut session = LessonSession::new(lesson);
    session.handle_input(&Key::new("\u{0e01}"));
    assert_eq!(
        session.handle_input(&Key::with_output("\u{25cc}\u{0e34}", "\u{0e34}")),
        InputOutcome::LessonFinished
    );
}

#[test]
fn pure_functions_match_session_behaviour() {
    let lesson = two_part_lesson();
    let mut state = SessionState::new();
    for ch in ["a", "b", "c"] {
        let pass = compute_view(&lesson, &state);
        state.merge_seen(&pass.seen);
        state = advance(&lesson, &state, ch).0;
    }
    state = request_hint(&state);
    assert_eq!(compute_view(&lesson, &state).view.remaining, "a b");
}

#[test]
fn snapshot_survives_json_and_resumes() {
    let mut session = LessonSession::new(two_part_lesson());
    type_str(&mut session, "abc");
    session.handle_hint();
    let json = serde_json::to_string(&session.snapshot()).unwrap();

    let restored: SessionState = serde_json::from_str(&json).unwrap();
    let mut resumed = LessonSession::resume(two_part_lesson(), restored);
    assert_eq!(resumed.view().remaining, "a b");
}

#[test]
fn bundled_lesson_can_be_typed_to_the_end() {
    let lesson = catalog::load_bundled("home-row").unwrap();
    let parts: Vec<String> = lesson
        .parts
        .iter()
        .map(|part| part.flattened().into_iter().collect())
        .collect();
    let mut session = LessonSession::new(lesson);

    let mut last = InputOutcome::Ignored;
    for text in &parts {
        for ch in text.chars() {
            last = session.handle_input(&Key::from_char(ch));
            assert!(last.accepted());
        }
    }
    assert_eq!(last, InputOutcome::LessonFinished);
}
