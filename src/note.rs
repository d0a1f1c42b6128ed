use serde::{Deserialize, Serialize};

/// A single persisted note.
///
/// The durable file written by the legacy form server used `section` for the
/// category field; it is accepted on load but always written back as `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    #[serde(alias = "section")]
    pub tag: String,
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
    #[serde(default)]
    pub content: String,
}

/// Caller-supplied fields for a new note, prior to id assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub tag: String,
    pub date: String,
    pub content: Option<String>,
}

impl Note {
    /// Check the note against an optional tag filter and an optional
    /// case-insensitive substring search over title and content.
    ///
    /// An absent or empty tag filter matches every note.
    pub fn matches(&self, tag: Option<&str>, search: Option<&str>) -> bool {
        let tag_ok = tag.map_or(true, |t| t.is_empty() || self.tag == t);
        let search_ok = search.map_or(true, |q| {
            let q = q.to_lowercase();
            self.title.to_lowercase().contains(&q) || self.content.to_lowercase().contains(&q)
        });
        tag_ok && search_ok
    }
}
