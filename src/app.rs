use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use levelup::config::Config;
use levelup::keyboard::{Key, KeyPress, Modifiers};
use levelup::lesson::{InputOutcome, Lesson, LessonSession, LessonView, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Lesson,
    Finished,
}

pub struct App {
    pub screen: AppScreen,
    pub session: LessonSession,
    pub view: LessonView,
    pub config: Config,
    pub lesson_name: String,
    pub last_outcome: Option<InputOutcome>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        lesson: Lesson,
        lesson_name: &str,
        snapshot: Option<SessionState>,
        config: Config,
    ) -> Self {
        let mut session = match snapshot {
            Some(snapshot) => LessonSession::resume(lesson, snapshot),
            None => LessonSession::new(lesson),
        };
        let view = session.view();
        Self {
            screen: AppScreen::Lesson,
            session,
            view,
            config,
            lesson_name: lesson_name.to_string(),
            last_outcome: None,
            should_quit: false,
        }
    }

    pub fn title(&self) -> &str {
        self.session
            .lesson()
            .title
            .as_deref()
            .unwrap_or(&self.lesson_name)
    }

    pub fn part_label(&self) -> String {
        format!(
            "Part {}/{}",
            self.session.state().part_index + 1,
            self.session.lesson().parts.len()
        )
    }

    pub fn handle_key_press(&mut self, press: &KeyPress) -> InputOutcome {
        let outcome = self.session.handle_input(&press.key);
        self.last_outcome = Some(outcome);
        if outcome == InputOutcome::LessonFinished {
            info!(lesson = %self.lesson_name, "lesson attempt finished");
            self.screen = AppScreen::Finished;
        }
        self.refresh();
        outcome
    }

    pub fn request_hint(&mut self) {
        self.session.handle_hint();
        self.refresh();
    }

    pub fn restart(&mut self) {
        let lesson = self.session.lesson().clone();
        self.session = LessonSession::new(lesson);
        self.screen = AppScreen::Lesson;
        self.last_outcome = None;
        self.refresh();
    }

    /// The view is derived after every transition so the screen never shows
    /// stale state.
    fn refresh(&mut self) {
        self.view = self.session.view();
    }
}

/// Translate a terminal key into the keyboard contract. Only printable keys
/// without Ctrl/Alt count as typing.
pub fn key_press_from_event(key: &KeyEvent) -> Option<KeyPress> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(KeyPress::new(
            Key::from_char(ch),
            Modifiers {
                shift: key.modifiers.contains(KeyModifiers::SHIFT),
            },
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelup::lesson::LessonPart;

    fn app() -> App {
        let lesson = Lesson::new(vec![
            LessonPart::from_sources(&["a", "bc"]),
            LessonPart::from_sources(&["a", "b"]),
        ])
        .unwrap();
        App::new(lesson, "test", None, Config::default())
    }

    fn press(app: &mut App, ch: char) -> InputOutcome {
        app.handle_key_press(&KeyPress::new(Key::from_char(ch), Modifiers::default()))
    }

    #[test]
    fn test_view_follows_input() {
        let mut app = app();
        assert_eq!(app.view.remaining, "a bc");
        press(&mut app, 'a');
        assert_eq!(app.view.done, "a");
        assert_eq!(app.view.remaining, " bc");
    }

    #[test]
    fn test_hint_reveals_masked_word() {
        let mut app = app();
        for ch in "abc".chars() {
            press(&mut app, ch);
        }
        assert_eq!(app.part_label(), "Part 2/2");
        assert_eq!(app.view.remaining, "? b");
        app.request_hint();
        assert_eq!(app.view.remaining, "a b");
    }

    #[test]
    fn test_finishing_switches_screen_and_restart_resets() {
        let mut app = app();
        for ch in "abcab".chars() {
            press(&mut app, ch);
        }
        assert_eq!(app.screen, AppScreen::Finished);
        app.restart();
        assert_eq!(app.screen, AppScreen::Lesson);
        assert_eq!(app.session.state(), &SessionState::default());
        assert_eq!(app.view.remaining, "a bc");
    }

    #[test]
    fn test_title_falls_back_to_lesson_name() {
        assert_eq!(app().title(), "test");
    }

    #[test]
    fn test_key_press_from_event() {
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        let press = key_press_from_event(&shifted).unwrap();
        assert_eq!(press.key.resolved(), "A");
        assert!(press.modifiers.shift);

        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(key_press_from_event(&ctrl).is_none());
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert!(key_press_from_event(&tab).is_none());
    }
}
