use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::contact_repository::{ContactRepository, StoreError};
use crate::domain::contacts::contact_message::{ContactMessage, NewContactMessage};

/// Process-local contact store. Records live as long as the process.
#[derive(Default)]
pub struct InMemoryContactRepository {
    records: RwLock<Vec<ContactMessage>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let record = message.into_record(Uuid::new_v4(), chrono::Utc::now());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let mut out: Vec<ContactMessage> = self.records.read().await.iter().rev().cloned().collect();
        // stable: equal timestamps keep later inserts first
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }
}
