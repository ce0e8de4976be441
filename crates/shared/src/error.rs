use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("fact deck must contain at least one fact")]
    EmptyDeck,
}
