use crate::application::ports::contact_repository::{ContactRepository, StoreError};
use crate::domain::contacts::contact_message::{
    ContactMessage, ContactSubmission, NewContactMessage, ValidationErrors,
};

#[derive(thiserror::Error, Debug)]
pub enum SendContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("failed to store contact message")]
    Store(#[source] StoreError),
}

pub struct SendContactMessage<'a, R: ContactRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ContactRepository + ?Sized> SendContactMessage<'a, R> {
    pub async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, SendContactError> {
        let message = NewContactMessage::parse(submission)?;
        self.repo
            .insert(message)
            .await
            .map_err(SendContactError::Store)
    }
}
