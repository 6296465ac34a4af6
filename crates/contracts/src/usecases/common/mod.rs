//! Common types and traits for all UseCases

pub mod form_error;
pub mod mutation;
pub mod usecase_metadata;

// Re-exports
pub use form_error::{required, FormError};
pub use mutation::MutationUseCase;
pub use usecase_metadata::UseCaseMetadata;
