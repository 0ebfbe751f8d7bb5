pub mod contact;
pub mod roster;
pub mod notification;
pub mod person_service;
pub mod api_client;
pub mod app_state;
pub mod view;
pub mod interrupt;

pub use self::{
    contact::{Contact, ContactId, NewContact},
    roster::Roster,
    notification::{Notification, NotificationKind, NOTIFICATION_TIMEOUT},
    person_service::PersonService,
    api_client::ApiClient,
    app_state::{AppState, Confirm, Outcome},
    interrupt::until_interrupted,
};
