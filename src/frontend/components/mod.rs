//! UI components and layouts.

pub mod cta;
pub mod doc_card;
pub mod shell;
pub mod text_input;

pub use cta::Cta;
pub use doc_card::DocCard;
pub use shell::Shell;
pub use text_input::TextInput;
