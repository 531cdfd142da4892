use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardOption {
    #[serde(deserialize_with = "non_empty_path")]
    pub image_file_name: String,
    pub title: String,
}

impl BoardOption {
    pub fn new(image_file_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image_file_name: image_file_name.into(),
            title: title.into(),
        }
    }
}

// A stored option always names an image; an empty path only ever means an
// unused editor slot, which is never written out.
fn non_empty_path<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let path = String::deserialize(deserializer)?;
    if path.trim().is_empty() {
        return Err(serde::de::Error::custom("image_file_name must not be empty"));
    }
    Ok(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub options: Vec<BoardOption>,
}

impl Board {
    pub fn new(name: impl Into<String>, options: Vec<BoardOption>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardCollection {
    boards: Vec<Board>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Replaced(usize),
    Appended(usize),
}

impl StoreOutcome {
    pub fn index(self) -> usize {
        match self {
            Self::Replaced(index) | Self::Appended(index) => index,
        }
    }

    pub fn replaced(self) -> bool {
        matches!(self, Self::Replaced(_))
    }
}

impl BoardCollection {
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.boards.iter().position(|board| board.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&Board> {
        self.boards.iter().find(|board| board.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.boards.iter().map(|board| board.name.as_str())
    }

    pub fn store(&mut self, board: Board) -> StoreOutcome {
        match self.position(&board.name) {
            Some(index) => {
                self.boards[index] = board;
                StoreOutcome::Replaced(index)
            }
            None => {
                self.boards.push(board);
                StoreOutcome::Appended(self.boards.len() - 1)
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Board> {
        let index = self.position(name)?;
        Some(self.boards.remove(index))
    }
}

impl From<Vec<Board>> for BoardCollection {
    fn from(boards: Vec<Board>) -> Self {
        Self::new(boards)
    }
}
