//! Terminal front end for the SMS compose form.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod session;
