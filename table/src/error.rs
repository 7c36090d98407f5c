#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("key is already present")]
    DuplicateKey,
    #[error("key not found")]
    NotFound,
}
