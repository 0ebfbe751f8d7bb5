use async_trait::async_trait;

use crate::core::Result;
use super::contact::{Contact, ContactId, NewContact};

/// Operations on the remote contact collection.
///
/// Every call may fail; `Error::NotFound` signals the entity is already
/// gone server-side, any other error is a generic failure.
#[async_trait]
pub trait PersonService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Contact>>;
    async fn create(&self, contact: &NewContact) -> Result<Contact>;
    async fn update(&self, id: &ContactId, contact: &Contact) -> Result<Contact>;
    async fn remove(&self, id: &ContactId) -> Result<()>;
}
