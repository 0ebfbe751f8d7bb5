pub mod core;
pub mod phonebook;

pub use crate::core::{
    error::{self, Error, Result},
    config,
    logger,
    default_configuration as configuration,
};

pub use crate::phonebook::{
    Contact,
    ContactId,
    NewContact,
    Roster,
    Notification,
    NotificationKind,
    PersonService,
    ApiClient,
    AppState,
    Confirm,
    Outcome,
    until_interrupted,
    view,
};
