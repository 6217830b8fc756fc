use std::sync::Arc;
use tracing::{info, instrument, warn};

use models::record::{Model as Record, NewRecord};

use crate::errors::ServiceError;
use crate::records::repository::RecordRepository;
use crate::validation;

/// Create-only service for name/email records posted to `/create`.
pub struct RecordService<R: RecordRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RecordRepository + ?Sized> RecordService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn create(&self, body: &[u8]) -> Result<Record, ServiceError> {
        let input: NewRecord = validation::decode(body).map_err(|r| {
            warn!(rejection = %r, "record_rejected");
            r
        })?;
        let rec = self.repo.insert(input).await?;
        info!(id = rec.id, "record_created");
        Ok(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::repository::memory::MemoryRecordRepository;
    use crate::validation::Rejection;

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let svc = RecordService::new(Arc::new(MemoryRecordRepository::new()));
        let a = svc.create(br#"{"name": "John Doe", "email": "johndoe@example.com"}"#).await.unwrap();
        let b = svc.create(br#"{"name": "Jane", "email": "jane@example.com"}"#).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(a.name, "John Doe");
        assert_eq!(a.email, "johndoe@example.com");
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn invalid_payloads_leave_store_untouched() {
        let repo = Arc::new(MemoryRecordRepository::new());
        let svc = RecordService::new(Arc::clone(&repo));
        let bodies: [&[u8]; 3] = [br#"{"foo": "bar"}"#, b"{}", br#"{"name": "x"}"#];
        for body in bodies {
            let err = svc.create(body).await.unwrap_err();
            assert!(matches!(err, ServiceError::Rejected(Rejection::MissingFields { .. })));
        }
        let err = svc.create(b"").await.unwrap_err();
        assert!(matches!(err, ServiceError::Rejected(Rejection::MalformedPayload)));
        assert!(repo.is_empty());
    }
}
