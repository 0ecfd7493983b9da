use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
}

/// A key as reported by the keyboard. `main` is the label on the key;
/// `output` is what the key actually produces when that differs, e.g. a
/// combining vowel sign drawn on a placeholder base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub main: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Key {
    pub fn new(main: &str) -> Self {
        Self {
            main: main.to_string(),
            output: None,
        }
    }

    pub fn with_output(main: &str, output: &str) -> Self {
        Self {
            main: main.to_string(),
            output: Some(output.to_string()),
        }
    }

    pub fn from_char(ch: char) -> Self {
        Self {
            main: ch.to_string(),
            output: None,
        }
    }

    /// The text this key types: `output` when present and non-empty,
    /// otherwise `main`.
    pub fn resolved(&self) -> &str {
        match self.output.as_deref() {
            Some(out) if !out.is_empty() => out,
            _ => &self.main,
        }
    }
}

/// One key press as delivered to the lesson engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}
