use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Scan cancelled")]
    Cancelled,

    #[error("No ingredients recognized")]
    NothingRecognized,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Rating must be between 1 and 5 stars, got {0}")]
    InvalidRating(u8),

    #[error("No recipe variant at index {0}")]
    NoSuchVariant(usize),
}
