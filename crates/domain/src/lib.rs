mod board;
mod draft;
mod error;
mod pictogram;

pub use board::{Board, BoardCollection, BoardOption, StoreOutcome};
pub use draft::{derive_title, DraftEditor, Slot, DEFAULT_SLOT_COUNT};
pub use error::DomainError;
pub use pictogram::{
    accept_all, is_pictogram_file, CatalogBuilder, PictogramCatalog, PictogramEntry,
};
