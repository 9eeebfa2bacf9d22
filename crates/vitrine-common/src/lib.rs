pub mod errors;
pub mod types;

pub use errors::{ConfigError, ShellError, StoreError, VitrineError};
pub use types::{FracRect, PixelRect, ScreenSize};

pub type Result<T> = std::result::Result<T, VitrineError>;
