//! alexandria-chat
//!
//! The conversation surface: keeps the transcript, runs one extraction per
//! user turn and writes the companion's reply.

pub mod conversation;
pub mod error;
pub mod response;
