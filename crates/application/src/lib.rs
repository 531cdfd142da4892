mod error;
mod ports;
mod service;
mod store;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{BoardRepository, PictogramSource, ThumbnailArtifact, ThumbnailGenerator};
pub use service::ApplicationService;
pub use store::{BoardStore, StoreEvent};
pub use use_cases::{
    ActivatePictogramCommand, AddOptionCommand, ListBoardsCommand, LoadCatalogCommand,
    NewDocumentCommand, OpenBoardsCommand, RemoveBoardCommand, SaveBoardsCommand,
    SelectBoardCommand, ShowBoardCommand, StoreDraftCommand, ThumbnailCommand,
};
