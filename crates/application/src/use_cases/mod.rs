pub mod run_sweep;

pub use run_sweep::{RunSweepUseCase, SweepReport};
