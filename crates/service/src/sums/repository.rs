use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::sum::{NewSum, SumFilter, SumRecord};

use crate::errors::ServiceError;

/// Append-only store of computed sums.
///
/// An insert is visible to every query issued after it returns. Queries never
/// fail for "no match"; they return an empty vector ordered by ascending id.
#[async_trait]
pub trait SumRepository: Send + Sync {
    async fn insert(&self, sum: NewSum) -> Result<SumRecord, ServiceError>;
    async fn find_by_field(&self, filter: SumFilter) -> Result<Vec<SumRecord>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmSumRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSumRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl SumRepository for SeaOrmSumRepository {
    async fn insert(&self, sum: NewSum) -> Result<SumRecord, ServiceError> {
        let saved = crate::db::sum_service::create_sum(&self.db, sum).await?;
        Ok(SumRecord::from(saved))
    }

    async fn find_by_field(&self, filter: SumFilter) -> Result<Vec<SumRecord>, ServiceError> {
        let rows = crate::db::sum_service::find_sums(&self.db, filter).await?;
        Ok(rows.into_iter().map(SumRecord::from).collect())
    }
}

/// In-memory repository for tests and database-less runs.
pub mod memory {
    use super::*;
    use std::sync::{Mutex, PoisonError};

    #[derive(Default)]
    struct Inner {
        rows: Vec<SumRecord>,
        next_id: i64,
    }

    #[derive(Default)]
    pub struct MemorySumRepository {
        inner: Mutex<Inner>,
    }

    impl MemorySumRepository {
        pub fn new() -> Self { Self::default() }

        pub fn len(&self) -> usize {
            self.inner.lock().unwrap_or_else(PoisonError::into_inner).rows.len()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl SumRepository for MemorySumRepository {
        async fn insert(&self, sum: NewSum) -> Result<SumRecord, ServiceError> {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.next_id += 1;
            let rec = SumRecord::new(inner.next_id, sum);
            inner.rows.push(rec);
            Ok(rec)
        }

        async fn find_by_field(&self, filter: SumFilter) -> Result<Vec<SumRecord>, ServiceError> {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(inner.rows.iter().filter(|r| filter.matches(r)).copied().collect())
        }
    }
}
