pub mod fs;
pub mod presenters;

pub use fs::{FsThumbnailGenerator, JsonBoardFile, WalkdirPictogramScanner};
pub use presenters::{
    present_board, present_board_row, present_catalog, present_draft, present_thumbnail,
};
