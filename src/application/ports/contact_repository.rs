use async_trait::async_trait;

use crate::domain::contacts::contact_message::{ContactMessage, NewContactMessage};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The store could not be reached (network, TLS, pool exhausted or closed).
    #[error("contact store unavailable")]
    Unavailable(#[source] anyhow::Error),
    /// The store refused the record; carries one message per offending field.
    #[error("contact store rejected the record: {}", .0.join(", "))]
    Rejected(Vec<String>),
    #[error("contact store operation failed")]
    Other(#[source] anyhow::Error),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError>;

    // Ordered by created_at descending
    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, StoreError>;
}
