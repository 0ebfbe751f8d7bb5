use clap::{arg, Command};

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("Show the phonebook page")
}

pub(crate) fn filter_cli() -> Command {
    Command::new("filter")
        .about("Show only contacts whose name contains TEXT (no TEXT clears it)")
        .arg(arg!([TEXT] ... "The filter text").required(false))
}

pub(crate) fn name_cli() -> Command {
    Command::new("name")
        .about("Set the pending name")
        .arg(arg!(<NAME> ... "The contact name"))
        .arg_required_else_help(true)
}

pub(crate) fn number_cli() -> Command {
    Command::new("number")
        .about("Set the pending number")
        .arg(arg!(<NUMBER> "The phone number"))
        .arg_required_else_help(true)
}

pub(crate) fn add_cli() -> Command {
    Command::new("add")
        .about("Add the pending contact, or replace the number of an existing one")
        .arg(arg!(-n --name <NAME> ... "Set the pending name first")
            .required(false)
            .num_args(1..))
        .arg(arg!(-p --number <NUMBER> "Set the pending number first").required(false))
}

pub(crate) fn delete_cli() -> Command {
    Command::new("delete")
        .about("Delete a contact")
        .arg(arg!(<ID> "The contact id to be removed"))
        .arg_required_else_help(true)
}

pub(crate) fn reload_cli() -> Command {
    Command::new("reload")
        .about("Fetch all contacts from the server again")
}
