use std::path::PathBuf;

use clap::Parser;

/// Vitrine: a kiosk shell that tiles web dashboards across the screen.
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about)]
pub struct Args {
    /// Directory holding settings.toml, windows.json, layouts.json and views.json.
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Open this view at startup instead of showing the view selector.
    #[arg(long)]
    pub view: Option<String>,

    /// Log filter directive override (e.g. `vitrine=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "vitrine",
            "--config-dir",
            "/etc/vitrine",
            "--view",
            "night_shift",
            "--log-level",
            "vitrine=debug",
        ]);
        assert_eq!(args.config_dir, Some(PathBuf::from("/etc/vitrine")));
        assert_eq!(args.view.as_deref(), Some("night_shift"));
        assert_eq!(args.log_level.as_deref(), Some("vitrine=debug"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::parse_from(["vitrine"]);
        assert!(args.config_dir.is_none());
        assert!(args.view.is_none());
        assert!(args.log_level.is_none());
    }
}
