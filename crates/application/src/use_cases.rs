use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct NewDocumentCommand;

#[derive(Debug, Clone)]
pub struct OpenBoardsCommand {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SaveBoardsCommand {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoadCatalogCommand {
    pub root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ActivatePictogramCommand {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AddOptionCommand {
    pub image_file_name: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StoreDraftCommand;

#[derive(Debug, Clone)]
pub struct SelectBoardCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ShowBoardCommand {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct RemoveBoardCommand {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListBoardsCommand;

#[derive(Debug, Clone)]
pub struct ThumbnailCommand {
    pub source: PathBuf,
    pub cache_root: PathBuf,
    pub size: u32,
}
