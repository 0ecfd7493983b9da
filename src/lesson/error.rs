use thiserror::Error;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("lesson has no parts")]
    NoParts,
    #[error("part {part} has no words")]
    EmptyPart { part: usize },
    #[error("word {word} of part {part} has an empty source")]
    EmptyWord { part: usize, word: usize },
    #[error("invalid lesson file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read lesson: {0}")]
    Io(#[from] std::io::Error),
    #[error("lesson {0} is not valid UTF-8")]
    Encoding(String),
    #[error("unknown lesson: {0}")]
    NotFound(String),
}
