pub mod ensemble;
pub mod normalization;
pub mod state_machine;

pub use ensemble::EnsembleEngine;
pub use normalization::{NormalizationPipeline, NormalizationResources, NormalizedDocument};
pub use state_machine::DomainStateMachine;
