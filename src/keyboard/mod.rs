//! Contract between the keyboard and the lesson engine. The keyboard owns
//! layout and modifier handling; the engine only sees the resolved text of
//! each key press.

pub mod key;

pub use key::{Key, KeyPress, Modifiers};
