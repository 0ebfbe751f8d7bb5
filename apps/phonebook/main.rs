use std::io;
use clap::{Parser, ArgMatches, Command};
use log::LevelFilter;
use reedline::{Reedline, Signal};

mod prompt;
use prompt::MyPrompt;

mod cmds {
    pub(crate) mod contact_cmd;
}

use phonebook::{
    configuration as cfg,
    logger,
    view,
    ApiClient,
    AppState,
    until_interrupted,
    ContactId,
    Outcome,
};

/// What the read loop does with one read from the line editor.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Line(String),
    Quit,
    Fatal(String),
}

fn classify(read: io::Result<Signal>) -> Input {
    match read {
        Ok(Signal::Success(line)) => Input::Line(line),
        Ok(_) => Input::Quit,
        Err(e) => Input::Fatal(e.to_string()),
    }
}

fn build_cli() -> Command {
    Command::new("phonebook")
        .about("Interactive phonebook shell")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::contact_cmd::list_cli())
        .subcommand(cmds::contact_cmd::filter_cli())
        .subcommand(cmds::contact_cmd::name_cli())
        .subcommand(cmds::contact_cmd::number_cli())
        .subcommand(cmds::contact_cmd::add_cli())
        .subcommand(cmds::contact_cmd::delete_cli())
        .subcommand(cmds::contact_cmd::reload_cli())
        .help_template("{subcommands}")
}

fn joined(m: &ArgMatches, id: &str) -> Option<String> {
    m.get_many::<String>(id).map(|values| {
        values.map(|v| v.as_str()).collect::<Vec<_>>().join(" ")
    })
}

fn print_page(state: &AppState) {
    print!("{}", view::page(state));
}

fn print_outcome(state: &AppState, outcome: Option<Outcome>) {
    match outcome {
        Some(Outcome::Declined) => println!("Cancelled."),
        Some(_) => print_page(state),
        None => println!("Interrupted, request abandoned."),
    }
}

async fn execute_command(matches: ArgMatches,
    client: &ApiClient,
    state: &mut AppState,
    rl: &mut Reedline
) {
    let mut ask = |question: &str| prompt::confirm(rl, question);

    match matches.subcommand() {
        Some(("list", _)) => print_page(state),

        Some(("filter", m)) => {
            state.set_filter(&joined(m, "TEXT").unwrap_or_default());
            print_page(state);
        }

        Some(("name", m)) => {
            state.set_new_name(&joined(m, "NAME").unwrap_or_default());
            print_page(state);
        }

        Some(("number", m)) => {
            if let Some(number) = m.get_one::<String>("NUMBER") {
                state.set_new_number(number);
            }
            print_page(state);
        }

        Some(("add", m)) => {
            if let Some(name) = joined(m, "name") {
                state.set_new_name(&name);
            }
            if let Some(number) = m.get_one::<String>("number") {
                state.set_new_number(number);
            }

            let outcome = until_interrupted(
                state.submit(client, &mut ask),
                tokio::signal::ctrl_c()
            ).await;
            print_outcome(state, outcome);
        }

        Some(("delete", m)) => {
            let Some(id) = m.get_one::<String>("ID") else {
                println!("Error: missing contact id");
                return;
            };

            let id = ContactId::new(id);
            let Some(name) = state.roster().get(&id).map(|v| v.name().to_string()) else {
                println!("No contact with id {}", id);
                return;
            };

            let outcome = until_interrupted(
                state.delete(client, &mut ask, &id, &name),
                tokio::signal::ctrl_c()
            ).await;
            print_outcome(state, outcome);
        }

        Some(("reload", _)) => {
            match until_interrupted(state.load(client), tokio::signal::ctrl_c()).await {
                Some(Ok(_)) => print_page(state),
                Some(Err(e)) => println!("Error: reloading phonebook failed: {e}"),
                None => println!("Interrupted, request abandoned."),
            }
        }

        _ => println!("Unknown command"),
    }
}

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version = "1.0")]
#[command(about = "Interactive phonebook shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Base URL of the contact collection
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            return;
        }
    }
    if let Some(url) = opts.url.as_ref() {
        builder.with_base_url(url);
    }
    if let Some(level) = opts.log_level.as_ref() {
        let Ok(level) = level.parse::<LevelFilter>() else {
            eprintln!("Invalid log level: {}", level);
            return;
        };
        builder.with_logger(level, None);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Setting up logger error: {e}");
        return;
    }

    let client = match ApiClient::new(cfg.base_url()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating phonebook client error: {e}");
            return;
        }
    };

    let mut state = AppState::new();
    match until_interrupted(state.load(&client), tokio::signal::ctrl_c()).await {
        Some(Ok(_)) => {}
        Some(Err(e)) => eprintln!("Loading phonebook from {} error: {e}", client.base_url()),
        None => eprintln!("Loading phonebook interrupted, starting empty."),
    }

    let mut cli = build_cli();
    let mut rl = Reedline::create();
    let prompt = MyPrompt;

    println!("Welcome to interactive phonebook shell. Type 'exit' to quit.\n");
    print_page(&state);

    loop {
        match classify(rl.read_line(&prompt)) {
            Input::Line(line) => {
                let input = line.trim();

                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args: Vec<String> = input.split_whitespace().map(|s| s.to_string())
                    .collect();

                if args[0] == "help" {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let cmd = args.join(" ");
                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &client, &mut state, &mut rl).await,
                    Err(_) => {
                        println!("Error: command not found: '{}'", cmd);
                    }
                }
            }
            Input::Quit => {
                println!("\nGoodbye!");
                break;
            }
            Input::Fatal(e) => {
                eprintln!("Reading input error: {e}");
                break;
            }
        }
    }

    logger::teardown();
}
