pub mod progress_bar;
pub mod typing_area;
