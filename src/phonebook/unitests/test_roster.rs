use crate::phonebook::{Contact, ContactId, Roster};
use super::{arto, sample_contacts};

#[test]
fn test_filter_examples() {
    let roster = Roster::from(vec![arto()]);

    let shown = roster.filter("art");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id(), &ContactId::from(1));

    assert!(roster.filter("xyz").is_empty());
    assert_eq!(roster.filter("").len(), 1);
}

#[test]
fn test_filter_keeps_order_and_ignores_case() {
    let roster = Roster::from(sample_contacts());

    let names: Vec<&str> = roster.filter("A").iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["Arto Hellas", "Ada Lovelace", "Dan Abramov", "Mary Poppendieck"]);

    let names: Vec<&str> = roster.filter("OV").iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Dan Abramov"]);

    // filtering never touches the roster itself
    assert_eq!(roster.len(), 4);
}

#[test]
fn test_snapshot_drops_duplicate_ids() {
    let roster = Roster::from(vec![
        arto(),
        Contact::new(ContactId::from(1), "Someone Else", "1"),
        Contact::new(ContactId::from(2), "Ada Lovelace", "2"),
    ]);

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get(&ContactId::from(1)).unwrap().name(), "Arto Hellas");
}

#[test]
fn test_insert_replace_remove() {
    let mut roster = Roster::new();
    assert!(roster.is_empty());

    roster.insert(arto());
    roster.insert(Contact::new(ContactId::from(2), "Ada Lovelace", "2"));
    roster.insert(Contact::new(ContactId::from(1), "Arto Hellas", "999"));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.iter().next().unwrap().number(), "999");

    assert!(roster.replace(&ContactId::from(2), Contact::new(ContactId::from(2), "Ada Lovelace", "3")));
    assert_eq!(roster.get(&ContactId::from(2)).unwrap().number(), "3");
    assert!(!roster.replace(&ContactId::from(9), arto()));

    assert_eq!(roster.find_by_name("ada LOVELACE").map(|v| v.id().clone()), Some(ContactId::from(2)));
    assert!(roster.find_by_name("ada").is_none());

    assert!(roster.remove(&ContactId::from(1)).is_some());
    assert!(roster.remove(&ContactId::from(1)).is_none());
    assert_eq!(roster.len(), 1);
}
