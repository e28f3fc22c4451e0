pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub(crate) mod event;
pub mod input;
pub mod logging;
pub mod recorder;
pub mod ui;
