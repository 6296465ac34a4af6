//! Common types shared by all aggregates

pub mod date;
pub mod directory;

// Re-exports
pub use directory::{load_party_lists, DirectorySource, FixtureDirectory, PartyDirectory, PartyLists};
