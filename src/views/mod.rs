pub mod common;
pub mod debug;
pub mod detail;
pub mod gallery;
pub mod spinner;
pub mod status_bar;
