//! Error types shared by the model, the collaborators and the controller

/// Failures of playlist store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Playlist '{0}' not found")]
    PlaylistNotFound(String),
    #[error("Nothing is playing")]
    NothingPlaying,
    #[error("Playlist name cannot be empty")]
    EmptyName,
}

/// Failures of the external collaborators (catalog search, lyrics lookup)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("{0} request timed out")]
    Timeout(&'static str),
    #[error("network failure: {0}")]
    Network(String),
    #[error("no lyrics available for '{0}'")]
    NotFound(String),
}

/// Failures while loading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("playlist '{playlist}' references unknown item '{item}'")]
    UnknownItem { playlist: String, item: String },
    #[error("item '{0}' is defined more than once")]
    DuplicateItem(String),
}
