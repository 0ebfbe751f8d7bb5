use std::time::Instant;
use log::{info, warn};

use crate::core::{Error, Result};
use super::{
    contact::{Contact, ContactId, NewContact},
    notification::Notification,
    person_service::PersonService,
    roster::Roster,
};

/// Asks the user to confirm a destructive or replacing action.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// What a user action ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Added(Contact),
    Updated(Contact),
    Deleted(ContactId),
    /// The server no longer had the entry; it was dropped locally.
    AlreadyRemoved(ContactId),
    Failed,
    Declined,
    Invalid,
}

/// The whole client-side state of the phonebook page.
#[derive(Debug, Default)]
pub struct AppState {
    roster      : Roster,
    new_name    : String,
    new_number  : String,
    filter      : String,
    notification: Option<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn new_number(&self) -> &str {
        &self.new_number
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_new_name(&mut self, name: &str) {
        self.new_name = name.to_string();
    }

    pub fn set_new_number(&mut self, number: &str) {
        self.new_number = number.to_string();
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn clear_inputs(&mut self) {
        self.new_name.clear();
        self.new_number.clear();
    }

    /// Contacts matching the current filter, in roster order.
    pub fn contacts_to_show(&self) -> Vec<&Contact> {
        self.roster.filter(&self.filter)
    }

    /// The notification still on screen right now, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification_at(Instant::now())
    }

    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|v| v.visible_at(now))
    }

    /// Shows `notification`, superseding whatever was shown before.
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Replaces the roster with the server's snapshot.
    pub async fn load<S>(&mut self, service: &S) -> Result<usize>
    where
        S: PersonService + ?Sized,
    {
        let contacts = service.get_all().await.inspect_err(|e| {
            warn!("Loading phonebook failed: {e}");
        })?;

        self.roster = Roster::from(contacts);
        info!("Loaded {} contacts", self.roster.len());
        Ok(self.roster.len())
    }

    /// Submits the pending name and number: replaces the number of an
    /// existing contact with the same name (after confirmation), otherwise
    /// creates a new contact.
    pub async fn submit<S, C>(&mut self, service: &S, confirm: &mut C) -> Outcome
    where
        S: PersonService + ?Sized,
        C: Confirm + ?Sized,
    {
        let name = self.new_name.trim().to_string();
        let number = self.new_number.trim().to_string();

        if name.is_empty() {
            self.notify(Notification::error("Name must not be empty"));
            return Outcome::Invalid;
        }

        if let Some(existing) = self.roster.find_by_name(&name).cloned() {
            let question = format!(
                "{} is already added to phonebook, replace the old number?",
                name
            );
            if !confirm.confirm(&question) {
                return Outcome::Declined;
            }
            return self.replace_number(service, existing, &number).await;
        }

        match service.create(&NewContact::new(&name, &number)).await {
            Ok(created) => {
                self.notify(Notification::success(&format!("Added {}", created.name())));
                self.roster.insert(created.clone());
                self.clear_inputs();
                Outcome::Added(created)
            }
            Err(_) => {
                self.notify(Notification::error(&format!("Failed to add {}", name)));
                Outcome::Failed
            }
        }
    }

    async fn replace_number<S>(&mut self, service: &S, existing: Contact, number: &str) -> Outcome
    where
        S: PersonService + ?Sized,
    {
        let changed = existing.with_number(number);
        match service.update(existing.id(), &changed).await {
            Ok(updated) => {
                self.notify(Notification::success(
                    &format!("Updated {}'s number", updated.name())
                ));
                if !self.roster.replace(existing.id(), updated.clone()) {
                    self.roster.insert(updated.clone());
                }
                self.clear_inputs();
                Outcome::Updated(updated)
            }
            Err(e) => {
                dropped_locally(&existing, &e);
                self.roster.remove(existing.id());
                self.notify(Notification::error(&format!(
                    "Information of {} has already been removed from server",
                    existing.name()
                )));
                Outcome::AlreadyRemoved(existing.id().clone())
            }
        }
    }

    /// Deletes contact `id` after confirmation. The entry leaves the local
    /// roster whether or not the server still had it.
    pub async fn delete<S, C>(&mut self,
        service: &S,
        confirm: &mut C,
        id: &ContactId,
        name: &str
    ) -> Outcome
    where
        S: PersonService + ?Sized,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(&format!("Delete {}?", name)) {
            return Outcome::Declined;
        }

        let result = service.remove(id).await;
        let removed = self.roster.remove(id);
        if let (Some(contact), Err(e)) = (removed.as_ref(), result.as_ref()) {
            dropped_locally(contact, e);
        }

        match result {
            Ok(_) => {
                self.notify(Notification::success(&format!("Deleted {}", name)));
                Outcome::Deleted(id.clone())
            }
            Err(_) => {
                self.notify(Notification::error(&format!(
                    "Information of {} was already removed from server",
                    name
                )));
                Outcome::AlreadyRemoved(id.clone())
            }
        }
    }
}

fn dropped_locally(contact: &Contact, e: &Error) {
    if e.is_not_found() {
        info!("Contact {} is gone from the server, dropped locally", contact);
    } else {
        warn!("Contact {} dropped locally after failed call: {e}", contact);
    }
}
