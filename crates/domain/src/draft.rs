use std::path::Path;

use crate::{Board, BoardOption, DomainError};

pub const DEFAULT_SLOT_COUNT: usize = 6;

/// Label derived from an image path: the file name up to its first `.`,
/// uppercased. `/a/b/cat.png` becomes `CAT`.
pub fn derive_title(image_file_name: &str) -> String {
    let file_name = Path::new(image_file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_else(|| after_last_slash(image_file_name));
    let stem = match file_name.find('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };
    stem.to_uppercase()
}

fn after_last_slash(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    image_file_name: Option<String>,
    title: String,
    title_edited: bool,
}

impl Slot {
    pub fn image_file_name(&self) -> Option<&str> {
        self.image_file_name.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_title_edited(&self) -> bool {
        self.title_edited
    }

    pub fn is_used(&self) -> bool {
        self.image_file_name.is_some()
    }

    fn set_image(&mut self, image_file_name: String) {
        if !self.title_edited {
            self.title = derive_title(&image_file_name);
        }
        self.image_file_name = Some(image_file_name);
    }

    fn set_title(&mut self, title: String) {
        self.title_edited = !title.is_empty();
        self.title = title;
    }

    fn apply_title(&mut self, title: &str) {
        let derived = self
            .image_file_name
            .as_deref()
            .map(derive_title)
            .unwrap_or_default();
        if title == derived {
            self.title = derived;
            self.title_edited = false;
        } else {
            self.set_title(title.to_string());
        }
    }

    fn to_option(&self) -> Option<BoardOption> {
        self.image_file_name
            .as_ref()
            .map(|image| BoardOption::new(image.clone(), self.title.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEditor {
    name: String,
    slots: Vec<Slot>,
    selected: Option<usize>,
}

impl Default for DraftEditor {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT)
    }
}

impl DraftEditor {
    pub fn new(capacity: usize) -> Self {
        Self {
            name: String::new(),
            slots: vec![Slot::default(); capacity],
            selected: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select_slot(&mut self, index: usize) -> Result<(), DomainError> {
        self.check_index(index)?;
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn first_unused(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.is_used())
    }

    /// Puts an image (and optionally a title) into the target slot and
    /// returns its index. Fails without touching any slot when every slot
    /// is used and none is selected.
    pub fn add_option(
        &mut self,
        image_file_name: &str,
        title: Option<&str>,
    ) -> Result<usize, DomainError> {
        if image_file_name.trim().is_empty() {
            return Err(DomainError::EmptyImagePath);
        }
        let index = self
            .selected
            .or_else(|| self.first_unused())
            .ok_or(DomainError::DraftFull {
                capacity: self.capacity(),
            })?;

        let slot = &mut self.slots[index];
        slot.set_image(image_file_name.to_string());
        if let Some(title) = title {
            slot.apply_title(title);
        }
        Ok(index)
    }

    pub fn set_image(&mut self, index: usize, image_file_name: &str) -> Result<(), DomainError> {
        self.check_index(index)?;
        if image_file_name.trim().is_empty() {
            return Err(DomainError::EmptyImagePath);
        }
        self.slots[index].set_image(image_file_name.to_string());
        Ok(())
    }

    pub fn set_title(&mut self, index: usize, title: &str) -> Result<(), DomainError> {
        self.check_index(index)?;
        self.slots[index].set_title(title.to_string());
        Ok(())
    }

    pub fn clear_slot(&mut self, index: usize) -> Result<(), DomainError> {
        self.check_index(index)?;
        self.slots[index] = Slot::default();
        Ok(())
    }

    pub fn clean(&mut self) {
        self.name.clear();
        self.slots.iter_mut().for_each(|slot| *slot = Slot::default());
        self.selected = None;
    }

    pub fn get_data(&self) -> Board {
        Board::new(
            self.name.clone(),
            self.slots.iter().filter_map(Slot::to_option).collect(),
        )
    }

    pub fn load(&mut self, board: &Board) -> Result<(), DomainError> {
        if board.options.len() > self.capacity() {
            return Err(DomainError::DraftFull {
                capacity: self.capacity(),
            });
        }
        if board
            .options
            .iter()
            .any(|option| option.image_file_name.trim().is_empty())
        {
            return Err(DomainError::EmptyImagePath);
        }

        self.clean();
        self.name = board.name.clone();
        for option in &board.options {
            self.add_option(&option.image_file_name, Some(&option.title))?;
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), DomainError> {
        if index >= self.capacity() {
            return Err(DomainError::SlotOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }
}
