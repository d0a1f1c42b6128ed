use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::note::{Note, NoteDraft};

/// The note collection plus its backing JSON file.
///
/// Every successful mutation rewrites the whole file before returning, so the
/// in-memory view and the durable copy always agree. A failed write rolls the
/// in-memory change back and surfaces the error, leaving both sides on the
/// pre-mutation state. Acceptable for a personal dataset; a larger collection
/// would want an append-only log or an embedded store instead.
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
    last_id: u64,
}

impl NoteStore {
    /// Open the store backed by the given file.
    ///
    /// A missing file starts an empty collection. An unreadable or
    /// unparseable file is logged and also starts empty; the file is
    /// overwritten on the first successful mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let notes = match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str::<Vec<Note>>(&data) {
                Ok(notes) => notes,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to parse notes file, starting empty"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read notes file, starting empty"
                );
                Vec::new()
            }
        };
        let last_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
        Self {
            path,
            notes,
            last_id,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All notes in insertion order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a note by id.
    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Create a note from a draft, assign it the next id and persist.
    ///
    /// Ids are strictly increasing for the process lifetime and never reused,
    /// even after deletion.
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note> {
        let note = Note {
            id: self.last_id + 1,
            title: draft.title,
            tag: draft.tag,
            date: draft.date,
            content: draft.content.unwrap_or_default(),
        };
        self.notes.push(note.clone());
        if let Err(e) = self.save() {
            self.notes.pop();
            return Err(e);
        }
        self.last_id = note.id;
        Ok(note)
    }

    /// Replace the full record with a matching id and persist.
    ///
    /// Returns `Ok(false)` when no note has that id; nothing is mutated and
    /// no write is attempted.
    pub fn update(&mut self, note: Note) -> Result<bool> {
        let idx = match self.notes.iter().position(|n| n.id == note.id) {
            Some(idx) => idx,
            None => return Ok(false),
        };
        let previous = std::mem::replace(&mut self.notes[idx], note);
        if let Err(e) = self.save() {
            self.notes[idx] = previous;
            return Err(e);
        }
        Ok(true)
    }

    /// Remove the note with the given id and persist.
    ///
    /// Returns `Ok(false)` when no note has that id; no write is attempted.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let idx = match self.notes.iter().position(|n| n.id == id) {
            Some(idx) => idx,
            None => return Ok(false),
        };
        let removed = self.notes.remove(idx);
        if let Err(e) = self.save() {
            self.notes.insert(idx, removed);
            return Err(e);
        }
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.notes)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
