use communicator_domain::{Board, PictogramCatalog, PictogramEntry, StoreOutcome};
use tracing::info;

use crate::{
    ActivatePictogramCommand, AddOptionCommand, ApplicationError, BoardRepository, BoardStore,
    ListBoardsCommand, LoadCatalogCommand, NewDocumentCommand, OpenBoardsCommand,
    PictogramSource, RemoveBoardCommand, SaveBoardsCommand, SelectBoardCommand, ShowBoardCommand,
    StoreDraftCommand, StoreEvent, ThumbnailArtifact, ThumbnailCommand, ThumbnailGenerator,
};

pub struct ApplicationService {
    repository: Box<dyn BoardRepository>,
    pictograms: Box<dyn PictogramSource>,
    thumbnails: Box<dyn ThumbnailGenerator>,
    store: BoardStore,
    catalog: Option<PictogramCatalog>,
}

impl ApplicationService {
    pub fn new(
        repository: Box<dyn BoardRepository>,
        pictograms: Box<dyn PictogramSource>,
        thumbnails: Box<dyn ThumbnailGenerator>,
        slot_count: usize,
    ) -> Self {
        Self {
            repository,
            pictograms,
            thumbnails,
            store: BoardStore::new(slot_count),
            catalog: None,
        }
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    /// Hands over the change events queued since the last call. The host
    /// is expected to call this after every operation it runs.
    pub fn poll_events(&mut self) -> Vec<StoreEvent> {
        self.store.poll_events()
    }

    pub fn catalog(&self) -> Option<&PictogramCatalog> {
        self.catalog.as_ref()
    }

    pub fn new_document(&mut self, _command: NewDocumentCommand) {
        self.store.new_document();
    }

    pub fn open_boards(&mut self, command: OpenBoardsCommand) -> Result<usize, ApplicationError> {
        let text = self.repository.read_file(&command.path)?;
        self.store.load_text(&text)?;
        info!(path = %command.path.display(), boards = self.store.len(), "boards opened");
        Ok(self.store.len())
    }

    pub fn save_boards(&self, command: SaveBoardsCommand) -> Result<(), ApplicationError> {
        let text = self.store.serialize()?;
        self.repository.write_file(&command.path, &text)?;
        info!(path = %command.path.display(), boards = self.store.len(), "boards saved");
        Ok(())
    }

    pub fn load_catalog(
        &mut self,
        command: LoadCatalogCommand,
    ) -> Result<&PictogramCatalog, ApplicationError> {
        let catalog = self.pictograms.load_catalog(&command.root)?;
        info!(
            root = %command.root.display(),
            pictograms = catalog.leaf_count(),
            "pictogram catalog loaded"
        );
        Ok(&*self.catalog.insert(catalog))
    }

    pub fn activate_pictogram(
        &mut self,
        command: ActivatePictogramCommand,
    ) -> Result<usize, ApplicationError> {
        let catalog = self.catalog.as_ref().ok_or_else(|| {
            ApplicationError::InvalidInput("pictogram catalog is not loaded".to_string())
        })?;
        let entry = catalog.find(&command.path).ok_or_else(|| {
            ApplicationError::NotFound(format!(
                "pictogram {} is not in the catalog",
                command.path.display()
            ))
        })?;
        let image_file_name = match entry {
            PictogramEntry::Leaf { path, .. } => path.to_string_lossy().to_string(),
            PictogramEntry::Category { path, .. } => {
                return Err(ApplicationError::InvalidInput(format!(
                    "{} is a category, not a pictogram",
                    path.display()
                )));
            }
        };
        Ok(self.store.add_option(&image_file_name, None)?)
    }

    pub fn add_option(&mut self, command: AddOptionCommand) -> Result<usize, ApplicationError> {
        Ok(self
            .store
            .add_option(&command.image_file_name, command.title.as_deref())?)
    }

    pub fn store_draft(
        &mut self,
        _command: StoreDraftCommand,
    ) -> Result<StoreOutcome, ApplicationError> {
        if self.store.draft().name().trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "board name must not be empty".to_string(),
            ));
        }
        Ok(self.store.store_draft())
    }

    pub fn select_board(&mut self, command: SelectBoardCommand) -> Result<bool, ApplicationError> {
        Ok(self.store.select_board(&command.name)?)
    }

    pub fn show_board(&self, command: ShowBoardCommand) -> Result<&Board, ApplicationError> {
        self.store
            .board(&command.name)
            .ok_or_else(|| ApplicationError::NotFound(format!("board {:?}", command.name)))
    }

    pub fn remove_board(&mut self, command: RemoveBoardCommand) -> bool {
        self.store.remove_board(&command.name)
    }

    pub fn list_boards(&self, _command: ListBoardsCommand) -> &[Board] {
        self.store.boards()
    }

    pub fn thumbnail(
        &self,
        command: ThumbnailCommand,
    ) -> Result<ThumbnailArtifact, ApplicationError> {
        if command.size == 0 {
            return Err(ApplicationError::InvalidInput(
                "thumbnail size must be positive".to_string(),
            ));
        }
        self.thumbnails
            .ensure_thumbnail(&command.source, &command.cache_root, command.size)
    }
}
