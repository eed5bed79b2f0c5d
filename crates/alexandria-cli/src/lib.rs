//! alexandria-cli
//!
//! Terminal front end for the Alexandria companion: one-shot extraction,
//! a JSON-lines filter, the sample walkthrough and an interactive chat.

pub mod commands;
pub mod config;
