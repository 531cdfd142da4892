use std::collections::VecDeque;

use communicator_domain::{Board, BoardCollection, DomainError, DraftEditor, StoreOutcome};
use tracing::{debug, warn};

use crate::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    DraftChanged,
    SlotSelected(Option<usize>),
    BoardStored {
        name: String,
        index: usize,
        replaced: bool,
    },
    BoardSelected(String),
    BoardRemoved(String),
    CollectionReplaced { len: usize },
}

#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    collection: BoardCollection,
    draft: DraftEditor,
    events: VecDeque<StoreEvent>,
}

impl BoardStore {
    pub fn new(slot_count: usize) -> Self {
        Self {
            collection: BoardCollection::default(),
            draft: DraftEditor::new(slot_count),
            events: VecDeque::new(),
        }
    }

    pub fn collection(&self) -> &BoardCollection {
        &self.collection
    }

    pub fn boards(&self) -> &[Board] {
        self.collection.boards()
    }

    pub fn board(&self, name: &str) -> Option<&Board> {
        self.collection.find(name)
    }

    pub fn board_names(&self) -> Vec<String> {
        self.collection.names().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn draft(&self) -> &DraftEditor {
        &self.draft
    }

    pub fn poll_events(&mut self) -> Vec<StoreEvent> {
        self.events.drain(..).collect()
    }

    pub fn new_document(&mut self) {
        self.collection = BoardCollection::default();
        self.draft.clean();
        self.emit(StoreEvent::CollectionReplaced { len: 0 });
        self.emit(StoreEvent::DraftChanged);
    }

    pub fn add_option(
        &mut self,
        image_file_name: &str,
        title: Option<&str>,
    ) -> Result<usize, DomainError> {
        let index = self.draft.add_option(image_file_name, title)?;
        debug!(slot = index, image = image_file_name, "pictogram placed in draft");
        self.emit(StoreEvent::DraftChanged);
        Ok(index)
    }

    pub fn select_slot(&mut self, index: usize) -> Result<(), DomainError> {
        self.draft.select_slot(index)?;
        self.emit(StoreEvent::SlotSelected(Some(index)));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.draft.clear_selection();
        self.emit(StoreEvent::SlotSelected(None));
    }

    pub fn set_title(&mut self, index: usize, title: &str) -> Result<(), DomainError> {
        self.draft.set_title(index, title)?;
        self.emit(StoreEvent::DraftChanged);
        Ok(())
    }

    pub fn clear_slot(&mut self, index: usize) -> Result<(), DomainError> {
        self.draft.clear_slot(index)?;
        self.emit(StoreEvent::DraftChanged);
        Ok(())
    }

    pub fn set_draft_name(&mut self, name: &str) {
        self.draft.set_name(name);
        self.emit(StoreEvent::DraftChanged);
    }

    pub fn clean_draft(&mut self) {
        self.draft.clean();
        self.emit(StoreEvent::DraftChanged);
    }

    pub fn store_board(&mut self, draft: Board) -> StoreOutcome {
        let name = draft.name.clone();
        let outcome = self.collection.store(draft);
        debug!(
            board = %name,
            index = outcome.index(),
            replaced = outcome.replaced(),
            "board stored"
        );
        self.emit(StoreEvent::BoardStored {
            name,
            index: outcome.index(),
            replaced: outcome.replaced(),
        });
        outcome
    }

    pub fn store_draft(&mut self) -> StoreOutcome {
        self.store_board(self.draft.get_data())
    }

    pub fn select_board(&mut self, name: &str) -> Result<bool, DomainError> {
        let Some(board) = self.collection.find(name) else {
            debug!(board = name, "select_board found no match");
            return Ok(false);
        };
        self.draft.load(board)?;
        self.emit(StoreEvent::BoardSelected(name.to_string()));
        self.emit(StoreEvent::DraftChanged);
        Ok(true)
    }

    pub fn remove_board(&mut self, name: &str) -> bool {
        match self.collection.remove(name) {
            Some(_) => {
                self.emit(StoreEvent::BoardRemoved(name.to_string()));
                true
            }
            None => {
                debug!(board = name, "remove_board found no match");
                false
            }
        }
    }

    pub fn serialize(&self) -> Result<String, ApplicationError> {
        serde_json::to_string(&self.collection)
            .map_err(|error| ApplicationError::Encode(error.to_string()))
    }

    pub fn deserialize(text: &str) -> Result<BoardCollection, ApplicationError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Swaps in the boards parsed from `text` and opens the first one in the
    /// draft. On a parse error the store is unchanged; a first board too big
    /// for the draft grid is kept in the collection but not opened.
    pub fn load_text(&mut self, text: &str) -> Result<(), ApplicationError> {
        let collection = Self::deserialize(text)?;
        let first = collection.boards().first().cloned();
        self.collection = collection;
        self.emit(StoreEvent::CollectionReplaced {
            len: self.collection.len(),
        });

        self.draft.clean();
        if let Some(board) = first {
            match self.draft.load(&board) {
                Ok(()) => self.emit(StoreEvent::BoardSelected(board.name)),
                Err(error) => {
                    warn!(board = %board.name, %error, "first board not opened in draft");
                }
            }
        }
        self.emit(StoreEvent::DraftChanged);
        Ok(())
    }

    fn emit(&mut self, event: StoreEvent) {
        self.events.push_back(event);
    }
}
