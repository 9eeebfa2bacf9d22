use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize {what}: {reason}")]
    Serialize { what: &'static str, reason: String },

    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("invalid record: {0}")]
    Invalid(String),

    #[error("no such entry: {0}")]
    NotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("layout not found: {0}")]
    LayoutNotFound(String),

    #[error("view not found: {0}")]
    ViewNotFound(String),

    #[error("window not configured: {0}")]
    UnknownWindow(String),

    #[error("there are no visible windows to save")]
    NoVisibleWindows,

    #[error("name must not be empty")]
    EmptyName,

    #[error("failed to create window {id}: {reason}")]
    WindowCreation { id: String, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}
