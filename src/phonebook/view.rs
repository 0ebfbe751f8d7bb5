use std::fmt::{self, Write};

use super::{
    app_state::AppState,
    contact::Contact,
};

pub fn render_notification<W: Write>(state: &AppState, out: &mut W) -> fmt::Result {
    match state.notification() {
        Some(notification) => writeln!(out, "{}", notification),
        None => Ok(()),
    }
}

pub fn render_filter<W: Write>(state: &AppState, out: &mut W) -> fmt::Result {
    writeln!(out, "filter shown with: {}", state.filter())
}

pub fn render_form<W: Write>(state: &AppState, out: &mut W) -> fmt::Result {
    writeln!(out, "name: {}", state.new_name())?;
    writeln!(out, "number: {}", state.new_number())
}

pub fn render_contacts<W: Write>(contacts: &[&Contact], out: &mut W) -> fmt::Result {
    for contact in contacts {
        writeln!(out, "{} (id {})", contact, contact.id())?;
    }
    Ok(())
}

pub fn render_page<W: Write>(state: &AppState, out: &mut W) -> fmt::Result {
    writeln!(out, "Phonebook")?;
    render_notification(state, out)?;
    render_filter(state, out)?;
    writeln!(out)?;
    writeln!(out, "Add a new")?;
    render_form(state, out)?;
    writeln!(out)?;
    writeln!(out, "Numbers")?;
    render_contacts(&state.contacts_to_show(), out)
}

/// The full page as a string.
pub fn page(state: &AppState) -> String {
    let mut out = String::new();
    _ = render_page(state, &mut out);
    out
}
