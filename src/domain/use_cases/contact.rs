use std::sync::Arc;

use crate::{
    entities::contact::{
        Contact, ContactInsert, ContactResponse, NewContactForm, CONTACT_RECEIVED_MESSAGE,
    },
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository + ?Sized,
{
    pub contact_repo: Arc<R>,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository + ?Sized,
{
    pub fn new(contact_repo: Arc<R>) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles a contact form submission
    pub async fn submit_contact(&self, form: NewContactForm) -> Result<ContactResponse, AppError> {
        let insert = ContactInsert::try_from(form)?;

        let contact = self.contact_repo.create_contact(&insert).await?;
        tracing::info!(contact_id = contact.id, "Contact message stored");

        Ok(ContactResponse {
            message: CONTACT_RECEIVED_MESSAGE.to_string(),
        })
    }

    /// Lists all stored contact messages
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.contact_repo.list_contacts().await
    }
}
