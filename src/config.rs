use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_RECENT_MATCHES: usize = 20;
const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding `matches/` and `timelines/`
    pub data_dir: PathBuf,
    /// How many of the most recent matches feed the aggregate stats
    pub recent_matches: usize,
    /// How many strengths/weaknesses to display
    pub top_n: usize,
    pub exclude_remakes: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("MATCH_INSIGHTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        let recent_matches = parse_var("MATCH_INSIGHTS_RECENT", DEFAULT_RECENT_MATCHES)?;
        let top_n = parse_var("MATCH_INSIGHTS_TOP", DEFAULT_TOP_N)?;
        let exclude_remakes = parse_var("MATCH_INSIGHTS_EXCLUDE_REMAKES", false)?;

        Ok(Config {
            data_dir,
            recent_matches,
            top_n,
            exclude_remakes,
        })
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".match_insights")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: Self::default_data_dir(),
            recent_matches: DEFAULT_RECENT_MATCHES,
            top_n: DEFAULT_TOP_N,
            exclude_remakes: false,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} has an invalid value: {}", name, raw))
        }),
        Err(_) => Ok(default),
    }
}
