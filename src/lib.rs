// Engine, key contract and config live in the library so the integration
// tests and benchmarks can reach them; the terminal front end is in main.rs.

pub mod config;
pub mod keyboard;
pub mod lesson;
