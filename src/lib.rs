pub mod cli;
pub mod error;
pub mod note;
pub mod server;
pub mod storage;

pub use error::{Result, ZametkiError};
pub use note::{Note, NoteDraft};
pub use storage::NoteStore;
