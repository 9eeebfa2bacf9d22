//! Settings validation.
//!
//! Checks numeric ranges and cross-field constraints, collecting every
//! problem into a single `ConfigError`.

use crate::schema::VitrineSettings;
use vitrine_common::ConfigError;

/// Run all validations on the settings, collecting all errors.
pub fn validate(settings: &VitrineSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_refresh(&mut errors, settings);
    validate_browser(&mut errors, settings);
    validate_edit(&mut errors, settings);
    validate_files(&mut errors, settings);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_refresh(errors: &mut Vec<String>, settings: &VitrineSettings) {
    let r = &settings.refresh;
    validate_range(
        errors,
        "refresh.default_interval_secs",
        r.default_interval_secs,
        5,
        86_400,
    );
    validate_range(errors, "refresh.recheck_delay_ms", r.recheck_delay_ms, 100, 60_000);
    validate_range(errors, "refresh.settle_delay_ms", r.settle_delay_ms, 0, 60_000);
}

fn validate_browser(errors: &mut Vec<String>, settings: &VitrineSettings) {
    let b = &settings.browser;
    validate_range(errors, "browser.cache_max_mb", b.cache_max_mb.into(), 16, 8192);
    if b.profile_name.trim().is_empty() {
        errors.push("browser.profile_name must not be empty".to_string());
    }
    if b.profile_name.contains(['/', '\\']) {
        errors.push(format!(
            "browser.profile_name = {:?} must be a plain directory name",
            b.profile_name
        ));
    }
}

fn validate_edit(errors: &mut Vec<String>, settings: &VitrineSettings) {
    let e = &settings.edit;
    validate_range(errors, "edit.resize_margin", e.resize_margin.into(), 4, 64);
    validate_range(errors, "edit.min_window_size", e.min_window_size.into(), 50, 2000);
    validate_range(errors, "edit.zoom_min", e.zoom_min.into(), 10, 100);
    validate_range(errors, "edit.zoom_max", e.zoom_max.into(), 100, 500);
}

fn validate_files(errors: &mut Vec<String>, settings: &VitrineSettings) {
    let f = &settings.files;
    for (name, value) in [
        ("files.windows", &f.windows),
        ("files.layouts", &f.layouts),
        ("files.views", &f.views),
        ("files.credentials", &f.credentials),
        ("files.proxy_credentials", &f.proxy_credentials),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("{name} must not be empty"));
        }
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(validate(&VitrineSettings::default()).is_ok());
    }

    #[test]
    fn out_of_range_values_are_collected() {
        let mut settings = VitrineSettings::default();
        settings.refresh.recheck_delay_ms = 10;
        settings.edit.zoom_max = 900;
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("refresh.recheck_delay_ms = 10"));
        assert!(err.contains("edit.zoom_max = 900"));
    }

    #[test]
    fn profile_name_must_be_plain() {
        let mut settings = VitrineSettings::default();
        settings.browser.profile_name = "../escape".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("plain directory name"));
    }

    #[test]
    fn empty_file_names_rejected() {
        let mut settings = VitrineSettings::default();
        settings.files.views = "  ".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("files.views must not be empty"));
    }
}
