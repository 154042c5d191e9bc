use super::Adapters;
use judol_filter_application::use_cases::RunSweepUseCase;
use std::sync::Arc;

pub struct UseCases {
    pub run_sweep: Arc<RunSweepUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        Self {
            run_sweep: Arc::new(RunSweepUseCase::new(
                adapters.records.clone(),
                adapters.fetcher.clone(),
                adapters.extractor.clone(),
                adapters.pipeline.clone(),
                adapters.engine.clone(),
                adapters.audit_log.clone(),
            )),
        }
    }
}
