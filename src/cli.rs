use crate::platform::{ListingFormat, PlatformConfig};
use clap::Parser;
use std::path::PathBuf;

/// Replace the Deep Rock Galactic intro videos with a downloaded clip.
///
/// The current intros are kept next to the originals as
/// `<unix time>_<name>` backups.
#[derive(Parser, Debug)]
#[command(name = "drg-intro-swap", version)]
pub struct Settings {
    /// Video link to download instead of prompting for one
    #[arg(long, env = "DRG_INTRO_URL")]
    pub url: Option<String>,

    /// Use this movie directory directly and skip the Steam lookup
    #[arg(long, env = "DRG_GAME_DIR", conflicts_with = "steam_root")]
    pub game_dir: Option<PathBuf>,

    /// Steam install directory, instead of reading it from the registry
    #[arg(long, env = "DRG_STEAM_ROOT")]
    pub steam_root: Option<PathBuf>,

    /// How library roots are read from libraryfolders.vdf
    #[arg(long, value_enum, default_value_t = ListingFormat::Structured)]
    pub listing_format: ListingFormat,

    /// Do not wait for enter after errors and at the end
    #[arg(long)]
    pub no_pause: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Settings {
    pub fn platform_config(&self) -> PlatformConfig {
        match &self.game_dir {
            Some(path_movies) => PlatformConfig::Manual {
                path_movies: path_movies.clone(),
            },
            None => PlatformConfig::Steam {
                steam_root: self.steam_root.clone(),
                format: self.listing_format,
            },
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_steam() {
        let settings = Settings::try_parse_from(["drg-intro-swap"]).unwrap();
        assert_eq!(
            settings.platform_config(),
            PlatformConfig::Steam {
                steam_root: None,
                format: ListingFormat::Structured,
            }
        );
        assert_eq!(settings.log_level(), log::LevelFilter::Warn);
        assert!(!settings.no_pause);
    }

    #[test]
    fn test_game_dir_selects_manual() {
        let settings =
            Settings::try_parse_from(["drg-intro-swap", "--game-dir", "/games/Movies"]).unwrap();
        assert_eq!(
            settings.platform_config(),
            PlatformConfig::Manual {
                path_movies: PathBuf::from("/games/Movies"),
            }
        );
    }

    #[test]
    fn test_steam_options() {
        let settings = Settings::try_parse_from([
            "drg-intro-swap",
            "--steam-root",
            "/opt/steam",
            "--listing-format",
            "fixed-column",
            "-vv",
            "--no-pause",
            "--url",
            "https://cdn.example/intro.mp4",
        ])
        .unwrap();
        assert_eq!(
            settings.platform_config(),
            PlatformConfig::Steam {
                steam_root: Some(PathBuf::from("/opt/steam")),
                format: ListingFormat::FixedColumn,
            }
        );
        assert_eq!(settings.log_level(), log::LevelFilter::Debug);
        assert!(settings.no_pause);
        assert_eq!(settings.url.as_deref(), Some("https://cdn.example/intro.mp4"));
    }

    #[test]
    fn test_game_dir_conflicts_with_steam_root() {
        let result = Settings::try_parse_from([
            "drg-intro-swap",
            "--game-dir",
            "/a",
            "--steam-root",
            "/b",
        ]);
        assert!(result.is_err());
    }
}
