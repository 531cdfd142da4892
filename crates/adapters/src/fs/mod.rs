mod board_file;
mod scanner;
mod thumbs;

pub use board_file::JsonBoardFile;
pub use scanner::WalkdirPictogramScanner;
pub use thumbs::FsThumbnailGenerator;
