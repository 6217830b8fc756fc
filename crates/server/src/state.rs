use std::sync::Arc;

use service::records::{
    repository::{memory::MemoryRecordRepository, RecordRepository},
    service::RecordService,
};
use service::sums::{
    repository::{memory::MemorySumRepository, SumRepository},
    service::SumService,
};

/// Shared router state. Each instance owns its own stores, so two states never
/// see each other's records.
#[derive(Clone)]
pub struct AppState {
    pub sums: Arc<SumService<dyn SumRepository>>,
    pub records: Arc<RecordService<dyn RecordRepository>>,
}

impl AppState {
    pub fn new(sums: Arc<dyn SumRepository>, records: Arc<dyn RecordRepository>) -> Self {
        Self {
            sums: Arc::new(SumService::new(sums)),
            records: Arc::new(RecordService::new(records)),
        }
    }

    /// Both resources kept in process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySumRepository::new()), Arc::new(MemoryRecordRepository::new()))
    }
}
