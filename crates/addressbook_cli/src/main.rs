//! Interactive address book assistant.
//!
//! # Responsibility
//! - Load the saved book at startup and save it when the session ends.
//! - Never overwrite a stored snapshot that could not be read.
//! - Read commands line by line and print one reply per command.

mod config;

use addressbook_core::db::open_db;
use addressbook_core::{
    core_version, execute, init_logging, parse_input, AddressBook, AddressBookRepository,
    CommandOutcome, SnapshotService, SqliteAddressBookRepository,
};
use chrono::{Local, NaiveDate};
use config::CliConfig;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const PROMPT: &str = "Enter a command: ";

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        eprintln!("file logging disabled: {err}");
    }
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!(
                "failed to open address book `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };
    let snapshots = SnapshotService::new(SqliteAddressBookRepository::new(&conn));

    println!("Welcome to the assistant bot!");
    let mut loaded = load_book(&snapshots);

    let stdin = io::stdin();
    let session = run_session(&mut loaded.book, stdin.lock(), io::stdout(), || {
        Local::now().date_naive()
    });
    if let Err(err) = &session {
        warn!("event=cli_io module=cli status=error error={err}");
        eprintln!("input/output error: {err}");
    }

    match save_book(&snapshots, &loaded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Book restored at startup.
struct LoadedBook {
    book: AddressBook,
    /// `false` when the stored snapshot was unreadable; saving would erase it.
    writable: bool,
}

fn load_book<R: AddressBookRepository>(snapshots: &SnapshotService<R>) -> LoadedBook {
    match snapshots.load() {
        Ok(book) => LoadedBook {
            book,
            writable: true,
        },
        Err(err) => {
            eprintln!("could not load saved contacts: {err}");
            eprintln!("starting with an empty book; changes in this session will not be saved");
            LoadedBook {
                book: AddressBook::new(),
                writable: false,
            }
        }
    }
}

fn save_book<R: AddressBookRepository>(
    snapshots: &SnapshotService<R>,
    loaded: &LoadedBook,
) -> Result<(), String> {
    if !loaded.writable {
        warn!("event=snapshot_save module=cli status=skipped reason=load_failed");
        return Err(
            "changes were not saved: the stored address book could not be read".to_string(),
        );
    }
    snapshots
        .save(&loaded.book)
        .map_err(|err| format!("failed to save contacts: {err}"))
}

/// Runs the prompt/dispatch loop until `close`/`exit` or end of input.
///
/// `today` is sampled per command so long sessions cross midnight correctly.
fn run_session(
    book: &mut AddressBook,
    mut input: impl BufRead,
    mut output: impl Write,
    today: impl Fn() -> NaiveDate,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            writeln!(output, "Invalid command.")?;
            continue;
        };

        match execute(book, today(), &command, &args) {
            CommandOutcome::Reply(reply) => writeln!(output, "{reply}")?,
            CommandOutcome::Exit(farewell) => {
                writeln!(output, "{farewell}")?;
                return Ok(());
            }
        }
    }
}
