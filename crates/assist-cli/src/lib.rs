pub mod commands;
pub mod logging;
pub mod render;
pub mod script;
