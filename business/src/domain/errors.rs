/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.read_failed")]
    Read,
    #[error("repository.write_failed")]
    Write,
    #[error("repository.corrupted")]
    Corrupted,
}
