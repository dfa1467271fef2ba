pub mod categories;
pub mod models;
pub mod transitions;
pub mod rankings;
pub mod commands;
