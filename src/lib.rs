pub mod engine;
pub mod ui;
