use std::fs;
use std::path::Path;

use rust_embed::Embed;
use tracing::{debug, warn};

use crate::lesson::error::LessonError;
use crate::lesson::model::Lesson;

#[derive(Embed)]
#[folder = "assets/lessons/"]
struct LessonAssets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonOrigin {
    Bundled,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonEntry {
    pub name: String,
    pub origin: LessonOrigin,
}

pub fn bundled_names() -> Vec<String> {
    let mut names: Vec<String> = LessonAssets::iter()
        .filter_map(|f| f.strip_suffix(".json").map(|n| n.to_string()))
        .collect();
    names.sort();
    names
}

pub fn load_bundled(name: &str) -> Result<Lesson, LessonError> {
    let file = LessonAssets::get(&format!("{name}.json"))
        .ok_or_else(|| LessonError::NotFound(name.to_string()))?;
    parse_embedded(name, file.data.as_ref())
}

fn parse_embedded(name: &str, data: &[u8]) -> Result<Lesson, LessonError> {
    let content =
        std::str::from_utf8(data).map_err(|_| LessonError::Encoding(name.to_string()))?;
    Lesson::from_json(content)
}

pub fn load_file(path: &Path) -> Result<Lesson, LessonError> {
    let content = fs::read_to_string(path)?;
    Lesson::from_json(&content)
}

/// Find a lesson by path, then by name in the user lesson directory, then
/// among the bundled lessons.
pub fn resolve(name_or_path: &str, lesson_dir: &Path) -> Result<Lesson, LessonError> {
    let as_path = Path::new(name_or_path);
    if as_path.is_file() {
        debug!(path = %as_path.display(), "loading lesson file");
        return load_file(as_path);
    }

    let user_path = lesson_dir.join(format!("{name_or_path}.json"));
    if user_path.is_file() {
        debug!(path = %user_path.display(), "loading user lesson");
        return load_file(&user_path);
    }

    load_bundled(name_or_path)
}

/// User lessons first, then bundled lessons not shadowed by a user lesson.
pub fn available(lesson_dir: &Path) -> Vec<LessonEntry> {
    let mut entries = Vec::new();

    match fs::read_dir(lesson_dir) {
        Ok(dir) => {
            let mut user: Vec<String> = dir
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) != Some("json") {
                        return None;
                    }
                    path.file_stem()
                        .and_then(|s| s.to_str())
                        .map(|s| s.to_string())
                })
                .collect();
            user.sort();
            entries.extend(user.into_iter().map(|name| LessonEntry {
                name,
                origin: LessonOrigin::User,
            }));
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!(dir = %lesson_dir.display(), %err, "cannot read lesson directory"),
    }

    for name in bundled_names() {
        if !entries.iter().any(|e| e.name == name) {
            entries.push(LessonEntry {
                name,
                origin: LessonOrigin::Bundled,
            });
        }
    }
    entries
}
