pub mod application;
pub mod commands;
pub mod error;
pub mod installer;
pub mod package;
pub mod runtime;
