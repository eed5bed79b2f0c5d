pub mod catalog;
pub mod record;
pub mod transcript;
