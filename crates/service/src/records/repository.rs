use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::record::{Model as Record, NewRecord, RecordFilter};

use crate::errors::ServiceError;

/// Append-only store of name/email records.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn insert(&self, record: NewRecord) -> Result<Record, ServiceError>;
    async fn find_by_field(&self, filter: RecordFilter) -> Result<Vec<Record>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRecordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordRepository for SeaOrmRecordRepository {
    async fn insert(&self, record: NewRecord) -> Result<Record, ServiceError> {
        crate::db::record_service::create_record(&self.db, record).await
    }

    async fn find_by_field(&self, filter: RecordFilter) -> Result<Vec<Record>, ServiceError> {
        crate::db::record_service::find_records(&self.db, filter).await
    }
}

/// Process-local record list. Ids are `len + 1`, which only stays unique
/// because records are never removed.
pub mod memory {
    use super::*;
    use std::sync::{Mutex, PoisonError};

    #[derive(Default)]
    pub struct MemoryRecordRepository {
        rows: Mutex<Vec<Record>>,
    }

    impl MemoryRecordRepository {
        pub fn new() -> Self { Self::default() }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner).len()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl RecordRepository for MemoryRecordRepository {
        async fn insert(&self, record: NewRecord) -> Result<Record, ServiceError> {
            let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
            let id = i32::try_from(rows.len() + 1)
                .map_err(|_| ServiceError::Db("record id space exhausted".into()))?;
            let rec = Record { id, name: record.name, email: record.email };
            rows.push(rec.clone());
            Ok(rec)
        }

        async fn find_by_field(&self, filter: RecordFilter) -> Result<Vec<Record>, ServiceError> {
            let rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(rows.iter().filter(|r| filter.matches(r)).cloned().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryRecordRepository;
    use super::*;
    use crate::test_support::get_db;

    async fn exercise(repo: &dyn RecordRepository) -> Result<(), anyhow::Error> {
        let a = repo.insert(NewRecord { name: "John Doe".into(), email: "johndoe@example.com".into() }).await?;
        let b = repo.insert(NewRecord { name: "John Doe".into(), email: "jd2@example.com".into() }).await?;
        assert_eq!((a.id, b.id), (1, 2));

        let same_name = repo.find_by_field(RecordFilter::Name("John Doe".into())).await?;
        assert_eq!(same_name, vec![a.clone(), b.clone()]);
        assert_eq!(repo.find_by_field(RecordFilter::Id(2)).await?, vec![b]);
        assert!(repo.find_by_field(RecordFilter::Email("none@example.com".into())).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn memory_repository_contract() -> Result<(), anyhow::Error> {
        let repo = MemoryRecordRepository::new();
        exercise(&repo).await?;
        assert_eq!(repo.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_contract() -> Result<(), anyhow::Error> {
        exercise(&SeaOrmRecordRepository::new(get_db().await?)).await
    }
}
