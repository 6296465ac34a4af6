pub mod submitter;

pub use submitter::MutationSubmitter;
