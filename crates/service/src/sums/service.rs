use std::sync::Arc;
use tracing::{info, instrument, warn};

use models::number::Number;
use models::sum::{SumFilter, SumRecord};

use crate::compute::compute_sum;
use crate::errors::ServiceError;
use crate::sums::repository::SumRepository;
use crate::validation::{self, SumInput};

/// Application service for the sum resource: validate, compute, store, query.
pub struct SumService<R: SumRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: SumRepository + ?Sized> SumService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Decode `body`, derive the result and persist it.
    ///
    /// # Examples
    /// ```
    /// use models::number::Number;
    /// use service::sums::{repository::memory::MemorySumRepository, service::SumService};
    /// use std::sync::Arc;
    /// let svc = SumService::new(Arc::new(MemorySumRepository::new()));
    /// let rec = tokio_test::block_on(svc.create(br#"{"num1": 2, "num2": 2}"#)).unwrap();
    /// assert_eq!(rec.id, 1);
    /// assert_eq!(rec.result, Number::Int(4));
    /// ```
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn create(&self, body: &[u8]) -> Result<SumRecord, ServiceError> {
        let input: SumInput = validation::decode(body).map_err(|r| {
            warn!(rejection = %r, "sum_rejected");
            r
        })?;
        let rec = self.repo.insert(compute_sum(input)).await?;
        info!(id = rec.id, num1 = %rec.num1, num2 = %rec.num2, result = %rec.result, "sum_created");
        Ok(rec)
    }

    /// Every stored sum whose result equals `value`; empty when none do.
    pub async fn find_by_result(&self, value: Number) -> Result<Vec<SumRecord>, ServiceError> {
        let found = self.repo.find_by_field(SumFilter::Result(value)).await?;
        info!(%value, count = found.len(), "sums_by_result");
        Ok(found)
    }
}
