use std::collections::HashSet;
use log::warn;

use super::contact::{Contact, ContactId};

/// Ordered contacts known to the client, at most one per id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    contacts: Vec<Contact>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|v| v.id() == id)
    }

    /// First contact whose name equals `name` ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|v| v.name_matches(name))
    }

    /// Appends `contact`, or replaces the entry already holding its id.
    pub fn insert(&mut self, contact: Contact) {
        match self.contacts.iter_mut().find(|v| v.id() == contact.id()) {
            Some(existing) => *existing = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Replaces the entry with id `id`. Returns false when no such entry.
    pub fn replace(&mut self, id: &ContactId, contact: Contact) -> bool {
        if !self.contacts.iter().any(|v| v.id() == id) {
            return false;
        }

        // the replacement may carry an id held by another entry
        if contact.id() != id {
            self.contacts.retain(|v| v.id() != contact.id());
        }
        if let Some(existing) = self.contacts.iter_mut().find(|v| v.id() == id) {
            *existing = contact;
        }
        true
    }

    pub fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        let pos = self.contacts.iter().position(|v| v.id() == id)?;
        Some(self.contacts.remove(pos))
    }

    /// Contacts whose name contains `pattern` ignoring case, in roster order.
    pub fn filter(&self, pattern: &str) -> Vec<&Contact> {
        let pattern = pattern.to_lowercase();
        self.contacts.iter()
            .filter(|v| v.name_contains(&pattern))
            .collect()
    }
}

impl From<Vec<Contact>> for Roster {
    fn from(contacts: Vec<Contact>) -> Self {
        let mut seen = HashSet::new();
        let contacts = contacts.into_iter().filter(|v| {
            let fresh = seen.insert(v.id().clone());
            if !fresh {
                warn!("Dropping duplicate contact id {} from snapshot", v.id());
            }
            fresh
        }).collect();

        Self { contacts }
    }
}
