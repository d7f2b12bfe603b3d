use crate::application::ports::contact_repository::{ContactRepository, StoreError};
use crate::domain::contacts::contact_message::ContactMessage;

pub struct ListContactMessages<'a, R: ContactRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ContactRepository + ?Sized> ListContactMessages<'a, R> {
    pub async fn execute(&self) -> Result<Vec<ContactMessage>, StoreError> {
        self.repo.list_newest_first().await
    }
}
