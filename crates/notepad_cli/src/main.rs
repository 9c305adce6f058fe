//! Command-line front-end over the notepad core.
//!
//! # Responsibility
//! - Drive `NoteStore` operations against a SQLite key-value file.
//! - Keep output line-oriented so it can be piped and grepped.
//!
//! # Environment
//! - `NOTEPAD_DB_PATH`: key-value database file (default `notepad.sqlite3`).
//! - `NOTEPAD_LOG_DIR`: absolute directory for rolling logs; unset disables logging.
//! - `NOTEPAD_LOG_LEVEL`: `trace|debug|info|warn|error`.

use log::info;
use notepad_core::{
    core_version, default_log_level, init_logging, Note, NoteId, NoteStore, SqliteKvStorage,
};
use std::error::Error;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "notepad.sqlite3";
const USAGE: &str = "usage: notepad <command>

commands:
  list                          list notes, newest first
  add <title> [content]         create a note
  edit <id> <title> [content]   replace a note's title and content
  delete <id>                   delete a note
  search <text>                 list notes whose title or content contains <text>
  version                       print the core version";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Add { title: String, content: String },
    Edit { id: NoteId, title: String, content: String },
    Delete { id: NoteId },
    Search { text: String },
    Version,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
            Self::Search { .. } => "search",
            Self::Version => "version",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliConfig {
    db_path: PathBuf,
    log_dir: Option<String>,
    log_level: String,
}

impl CliConfig {
    fn from_env() -> Self {
        Self {
            db_path: std::env::var_os("NOTEPAD_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
            log_dir: std::env::var("NOTEPAD_LOG_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty()),
            log_level: std::env::var("NOTEPAD_LOG_LEVEL")
                .unwrap_or_else(|_| default_log_level().to_string()),
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(args, CliConfig::from_env()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Vec<String>, config: CliConfig) -> Result<(), Box<dyn Error>> {
    let command = parse_command(args)?;
    if command == Command::Version {
        println!("notepad_core version={}", core_version());
        return Ok(());
    }

    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let storage = SqliteKvStorage::open(&config.db_path)?;
    let mut store = NoteStore::new(storage);
    store.load_initial();
    let command_name = command.name();

    match command {
        Command::List => print_notes(store.filtered_notes()),
        Command::Add { title, content } => {
            store.start_create();
            if let Some(draft) = store.selected_mut() {
                draft.title = title;
                draft.content = content;
            }
            store.save_selected();
            if let Some(saved) = store.selected() {
                println!("{}", saved.id);
            }
        }
        Command::Edit { id, title, content } => {
            let target = store
                .find(id)
                .cloned()
                .ok_or_else(|| format!("no note with id {id}"))?;
            store.select(&target);
            store.save(Note {
                title,
                content,
                ..target
            });
        }
        Command::Delete { id } => {
            let target = store
                .find(id)
                .cloned()
                .ok_or_else(|| format!("no note with id {id}"))?;
            store.delete(&target);
        }
        Command::Search { text } => {
            store.set_search_text(text);
            print_notes(store.filtered_notes());
        }
        Command::Version => {}
    }

    info!(
        "event=cli_command module=cli status=ok command={command_name} count={}",
        store.notes().len()
    );
    Ok(())
}

fn parse_command(args: Vec<String>) -> Result<Command, String> {
    let mut iter = args.into_iter();
    let Some(name) = iter.next() else {
        return Err(USAGE.to_string());
    };

    let command = match name.as_str() {
        "list" | "ls" => Command::List,
        "add" => Command::Add {
            title: required(&mut iter, "add", "<title>")?,
            content: iter.next().unwrap_or_default(),
        },
        "edit" => Command::Edit {
            id: parse_id(&required(&mut iter, "edit", "<id>")?)?,
            title: required(&mut iter, "edit", "<title>")?,
            content: iter.next().unwrap_or_default(),
        },
        "delete" | "rm" => Command::Delete {
            id: parse_id(&required(&mut iter, "delete", "<id>")?)?,
        },
        "search" => Command::Search {
            text: required(&mut iter, "search", "<text>")?,
        },
        "version" | "--version" => Command::Version,
        "help" | "--help" | "-h" => return Err(USAGE.to_string()),
        other => return Err(format!("unknown command `{other}`\n\n{USAGE}")),
    };

    if let Some(extra) = iter.next() {
        return Err(format!("unexpected argument `{extra}` for {name}"));
    }
    Ok(command)
}

fn required(
    iter: &mut impl Iterator<Item = String>,
    command: &str,
    what: &str,
) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("provide {what} for {command}"))
}

fn parse_id(value: &str) -> Result<NoteId, String> {
    value
        .trim()
        .parse::<NoteId>()
        .map_err(|_| format!("invalid note id `{value}`"))
}

fn print_notes(notes: &[Note]) {
    for note in notes {
        let title = if note.is_untitled() {
            "(untitled)"
        } else {
            note.title.as_str()
        };
        println!("{}\t{}\t{}", note.id, note.updated_at, title);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run, CliConfig, Command};
    use notepad_core::{KeyValueStorage, SqliteKvStorage, NOTES_STORAGE_KEY};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_add_with_optional_content() {
        assert_eq!(
            parse_command(args(&["add", "Groceries"])).unwrap(),
            Command::Add {
                title: "Groceries".to_string(),
                content: String::new(),
            }
        );
        assert_eq!(
            parse_command(args(&["add", "Work", "standup at 9"])).unwrap(),
            Command::Add {
                title: "Work".to_string(),
                content: "standup at 9".to_string(),
            }
        );
    }

    #[test]
    fn parse_rejects_bad_ids_and_extra_arguments() {
        let err = parse_command(args(&["delete", "abc"])).unwrap_err();
        assert!(err.contains("invalid note id"));

        let err = parse_command(args(&["list", "extra"])).unwrap_err();
        assert!(err.contains("unexpected argument"));

        let err = parse_command(args(&["edit", "12"])).unwrap_err();
        assert!(err.contains("<title>"));
    }

    #[test]
    fn parse_without_command_prints_usage() {
        let err = parse_command(Vec::new()).unwrap_err();
        assert!(err.starts_with("usage:"));
    }

    #[test]
    fn run_add_edit_delete_against_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            db_path: dir.path().join("notes.sqlite3"),
            log_dir: None,
            log_level: "info".to_string(),
        };

        run(args(&["add", "Groceries", "milk"]), config.clone()).unwrap();
        let stored = load(&config);
        assert_eq!(stored.len(), 1);
        let id = stored[0]["id"].as_i64().unwrap();

        run(
            args(&["edit", &id.to_string(), "Groceries", "oat milk"]),
            config.clone(),
        )
        .unwrap();
        assert_eq!(load(&config)[0]["content"], "oat milk");

        run(args(&["delete", &id.to_string()]), config.clone()).unwrap();
        assert!(load(&config).is_empty());

        let err = run(args(&["delete", &id.to_string()]), config).unwrap_err();
        assert!(err.to_string().contains("no note with id"));
    }

    fn load(config: &CliConfig) -> Vec<serde_json::Value> {
        let storage = SqliteKvStorage::open(&config.db_path).unwrap();
        let raw = storage.get_item(NOTES_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}
