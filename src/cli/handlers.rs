use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::{Result, ZametkiError};
use crate::note::{Note, NoteDraft};
use crate::server;
use crate::storage::NoteStore;

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn read_stdin() -> Result<Option<String>> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    if content.is_empty() {
        Ok(None)
    } else {
        Ok(Some(content))
    }
}

pub fn handle_add(
    file: PathBuf,
    title: String,
    tag: String,
    date: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = NoteStore::open(file);

    let content = if stdin { read_stdin()? } else { content };
    let draft = NoteDraft {
        title,
        tag,
        date: date.unwrap_or_else(today),
        content,
    };

    let note = store.create(draft)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note {} [{}] - {}", note.id, note.tag, note.title);
    }

    Ok(())
}

pub fn handle_list(
    file: PathBuf,
    tag: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let store = NoteStore::open(file);

    let notes: Vec<&Note> = store
        .list()
        .iter()
        .filter(|n| n.matches(tag.as_deref(), search.as_deref()))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes:\n");
        for n in notes {
            println!("  {:>3} {} [{}] {}", n.id, n.date, n.tag, n.title);
        }
    }

    Ok(())
}

pub fn handle_get(file: PathBuf, id: u64, json: bool) -> Result<()> {
    let store = NoteStore::open(file);

    let note = match store.get(id) {
        Some(n) => n,
        None => return Err(ZametkiError::NoteNotFound(id)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        println!("Note {}", note.id);
        println!("Title: {}", note.title);
        println!("Tag: {}", note.tag);
        println!("Date: {}", note.date);
        if !note.content.is_empty() {
            println!("\n{}", note.content);
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_update(
    file: PathBuf,
    id: u64,
    title: Option<String>,
    tag: Option<String>,
    date: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let mut store = NoteStore::open(file);

    let existing = match store.get(id) {
        Some(n) => n.clone(),
        None => return Err(ZametkiError::NoteNotFound(id)),
    };

    // overlay the provided fields; the store itself replaces the full record
    let content = if stdin {
        read_stdin()?.unwrap_or_default()
    } else {
        content.unwrap_or(existing.content)
    };
    let note = Note {
        id,
        title: title.unwrap_or(existing.title),
        tag: tag.unwrap_or(existing.tag),
        date: date.unwrap_or(existing.date),
        content,
    };

    if !store.update(note.clone())? {
        return Err(ZametkiError::NoteNotFound(id));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Updated note {} - {}", note.id, note.title);
    }

    Ok(())
}

pub fn handle_delete(file: PathBuf, id: u64, force: bool) -> Result<()> {
    let mut store = NoteStore::open(file);

    let note = match store.get(id) {
        Some(n) => n.clone(),
        None => return Err(ZametkiError::NoteNotFound(id)),
    };

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete note {} - {}? [y/N] ", note.id, note.title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(ZametkiError::Other(
                "Use --force to delete in non-interactive mode".to_string(),
            ));
        }
    }

    if !store.delete(id)? {
        return Err(ZametkiError::NoteNotFound(id));
    }

    println!("Deleted note {} - {}", note.id, note.title);

    Ok(())
}

pub fn handle_serve(file: PathBuf, port: u16) -> Result<()> {
    let store = NoteStore::open(file);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(store, port))
}
