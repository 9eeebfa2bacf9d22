//! `settings.toml` loading and creation.

mod loader;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{create_default_settings, load_from_path, load_or_create};
