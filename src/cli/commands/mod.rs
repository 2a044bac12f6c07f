//! CLI command implementations

pub mod add;
pub mod clear;
pub mod edit;
pub mod list;
pub mod remove;
pub mod version;
