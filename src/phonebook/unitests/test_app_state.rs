use crate::{
    Error,
    phonebook::{AppState, ContactId, NotificationKind, Outcome},
};
use super::{FakeService, arto, sample_contacts};

async fn loaded(service: &FakeService) -> AppState {
    let mut state = AppState::new();
    state.load(service).await.unwrap();
    state
}

#[tokio::test]
async fn test_load() {
    let service = FakeService::with_contacts(sample_contacts());
    let mut state = AppState::new();

    let count = state.load(&service).await.unwrap();
    assert_eq!(count, 4);
    assert_eq!(state.roster().len(), 4);
    assert!(state.notification().is_none());
}

#[tokio::test]
async fn test_add_new_contact() {
    let service = FakeService::with_contacts(vec![arto()]);
    let mut state = loaded(&service).await;
    let mut asked = false;

    state.set_new_name("Ada Lovelace");
    state.set_new_number("39-44-5323523");
    let outcome = state.submit(&service, &mut |_: &str| { asked = true; true }).await;

    let Outcome::Added(created) = outcome else {
        panic!("unexpected outcome {:?}", outcome);
    };
    assert!(!asked);
    assert_eq!(created.id(), &ContactId::from(2));
    assert_eq!(state.roster().len(), 2);
    assert_eq!(state.roster().iter().last().unwrap(), &created);
    assert_eq!(state.new_name(), "");
    assert_eq!(state.new_number(), "");

    let notification = state.notification().unwrap();
    assert_eq!(notification.kind(), NotificationKind::Success);
    assert_eq!(notification.message(), "Added Ada Lovelace");
}

#[tokio::test]
async fn test_add_failure_keeps_state() {
    let mut service = FakeService::with_contacts(vec![arto()]);
    service.fail_create = true;
    let mut state = loaded(&service).await;

    state.set_new_name("Ada Lovelace");
    state.set_new_number("39-44-5323523");
    let outcome = state.submit(&service, &mut |_: &str| true).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(state.roster().len(), 1);
    assert_eq!(state.new_name(), "Ada Lovelace");
    assert_eq!(state.new_number(), "39-44-5323523");
    assert!(state.notification().unwrap().is_error());
}

#[tokio::test]
async fn test_empty_name_rejected() {
    let service = FakeService::with_contacts(vec![arto()]);
    let mut state = loaded(&service).await;

    state.set_new_name("   ");
    state.set_new_number("1");
    let outcome = state.submit(&service, &mut |_: &str| true).await;

    assert_eq!(outcome, Outcome::Invalid);
    assert_eq!(service.calls(), vec!["get_all"]);
    assert!(state.notification().unwrap().is_error());
}

#[tokio::test]
async fn test_replace_number_confirmed() {
    let service = FakeService::with_contacts(sample_contacts());
    let mut state = loaded(&service).await;
    let mut question = String::new();

    state.set_new_name("arto HELLAS");
    state.set_new_number("040-999999");
    let outcome = state.submit(&service, &mut |q: &str| {
        question = q.to_string();
        true
    }).await;

    assert_eq!(question, "arto HELLAS is already added to phonebook, replace the old number?");
    let Outcome::Updated(updated) = outcome else {
        panic!("unexpected outcome {:?}", outcome);
    };
    assert_eq!(updated.id(), &ContactId::from(1));
    assert_eq!(updated.name(), "Arto Hellas");
    assert_eq!(state.roster().len(), 4);
    assert_eq!(state.roster().get(&ContactId::from(1)).unwrap().number(), "040-999999");
    assert_eq!(state.roster().iter().next().unwrap().id(), &ContactId::from(1));
    assert_eq!(state.new_name(), "");
    assert_eq!(state.notification().unwrap().message(), "Updated Arto Hellas's number");
    assert_eq!(service.calls(), vec!["get_all", "update"]);
}

#[tokio::test]
async fn test_replace_number_declined() {
    let service = FakeService::with_contacts(sample_contacts());
    let mut state = loaded(&service).await;
    let before = state.roster().clone();

    state.set_new_name("Arto Hellas");
    state.set_new_number("040-999999");
    let outcome = state.submit(&service, &mut |_: &str| false).await;

    assert_eq!(outcome, Outcome::Declined);
    assert_eq!(state.roster(), &before);
    assert_eq!(state.new_name(), "Arto Hellas");
    assert_eq!(state.new_number(), "040-999999");
    assert!(state.notification().is_none());
    assert_eq!(service.calls(), vec!["get_all"]);
}

#[tokio::test]
async fn test_replace_number_of_removed_contact() {
    let mut service = FakeService::with_contacts(sample_contacts());
    service.fail_update = Some(Error::NotFound("gone".into()));
    let mut state = loaded(&service).await;

    state.set_new_name("Arto Hellas");
    state.set_new_number("040-999999");
    let outcome = state.submit(&service, &mut |_: &str| true).await;

    assert_eq!(outcome, Outcome::AlreadyRemoved(ContactId::from(1)));
    assert_eq!(state.roster().len(), 3);
    assert!(state.roster().get(&ContactId::from(1)).is_none());

    let notification = state.notification().unwrap();
    assert!(notification.is_error());
    assert_eq!(notification.message(), "Information of Arto Hellas has already been removed from server");
}

#[tokio::test]
async fn test_update_generic_failure_also_removes() {
    let mut service = FakeService::with_contacts(sample_contacts());
    service.fail_update = Some(Error::Network("connection reset".into()));
    let mut state = loaded(&service).await;

    state.set_new_name("Ada Lovelace");
    state.set_new_number("1");
    let outcome = state.submit(&service, &mut |_: &str| true).await;

    assert_eq!(outcome, Outcome::AlreadyRemoved(ContactId::from(2)));
    assert_eq!(state.roster().len(), 3);
}

#[tokio::test]
async fn test_delete() {
    let service = FakeService::with_contacts(sample_contacts());
    let mut state = loaded(&service).await;
    let mut question = String::new();

    let id = ContactId::from(3);
    let outcome = state.delete(&service, &mut |q: &str| {
        question = q.to_string();
        true
    }, &id, "Dan Abramov").await;

    assert_eq!(question, "Delete Dan Abramov?");
    assert_eq!(outcome, Outcome::Deleted(id.clone()));
    assert_eq!(state.roster().len(), 3);
    assert!(state.roster().get(&id).is_none());
    assert_eq!(service.stored().len(), 3);
    assert_eq!(state.notification().unwrap().message(), "Deleted Dan Abramov");
}

#[tokio::test]
async fn test_delete_already_removed() {
    let service = FakeService::with_contacts(sample_contacts());
    let mut state = loaded(&service).await;

    // someone else removed it meanwhile
    let id = ContactId::from(4);
    service.contacts.lock().unwrap().retain(|v| v.id() != &id);

    let outcome = state.delete(&service, &mut |_: &str| true, &id, "Mary Poppendieck").await;
    assert_eq!(outcome, Outcome::AlreadyRemoved(id.clone()));
    assert_eq!(state.roster().len(), 3);

    let notification = state.notification().unwrap();
    assert!(notification.is_error());
    assert_eq!(notification.message(), "Information of Mary Poppendieck was already removed from server");
}

#[tokio::test]
async fn test_delete_network_failure_still_removes() {
    let mut service = FakeService::with_contacts(sample_contacts());
    service.fail_remove = Some(Error::Network("timeout".into()));
    let mut state = loaded(&service).await;

    let id = ContactId::from(2);
    let outcome = state.delete(&service, &mut |_: &str| true, &id, "Ada Lovelace").await;
    assert_eq!(outcome, Outcome::AlreadyRemoved(id.clone()));
    assert_eq!(state.roster().len(), 3);
    assert_eq!(service.stored().len(), 4);
}

#[tokio::test]
async fn test_delete_declined() {
    let service = FakeService::with_contacts(sample_contacts());
    let mut state = loaded(&service).await;

    let id = ContactId::from(2);
    let outcome = state.delete(&service, &mut |_: &str| false, &id, "Ada Lovelace").await;
    assert_eq!(outcome, Outcome::Declined);
    assert_eq!(state.roster().len(), 4);
    assert!(state.notification().is_none());
    assert_eq!(service.calls(), vec!["get_all"]);
}

#[tokio::test]
async fn test_filter_is_derived() {
    let service = FakeService::with_contacts(sample_contacts());
    let mut state = loaded(&service).await;

    state.set_filter("ART");
    let shown: Vec<&str> = state.contacts_to_show().iter().map(|v| v.name()).collect();
    assert_eq!(shown, vec!["Arto Hellas"]);

    state.set_new_name("Artemis");
    state.set_new_number("555");
    state.submit(&service, &mut |_: &str| true).await;

    let shown: Vec<&str> = state.contacts_to_show().iter().map(|v| v.name()).collect();
    assert_eq!(shown, vec!["Arto Hellas", "Artemis"]);
    assert_eq!(state.roster().len(), 5);
}
