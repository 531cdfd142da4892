#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("all {capacity} board slots are in use")]
    DraftFull { capacity: usize },
    #[error("slot {index} is out of range for a board with {capacity} slots")]
    SlotOutOfRange { index: usize, capacity: usize },
    #[error("image path must not be empty")]
    EmptyImagePath,
}
