use crate::api::models::MatchDto;
use crate::api::timeline::TimelineDto;
use crate::error::AppError;
use indicatif::ProgressBar;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Match and timeline documents saved on disk as
/// `<root>/matches/<id>.json` and `<root>/timelines/<id>.json`.
#[derive(Debug, Clone)]
pub struct MatchStore {
    root: PathBuf,
}

impl MatchStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MatchStore { root: root.into() }
    }

    pub fn matches_dir(&self) -> PathBuf {
        self.root.join("matches")
    }

    pub fn timelines_dir(&self) -> PathBuf {
        self.root.join("timelines")
    }

    pub fn timeline_path(&self, match_id: &str) -> PathBuf {
        self.timelines_dir().join(format!("{}.json", match_id))
    }

    /// Every readable match, newest first. Broken files are logged and skipped.
    pub fn load_matches(&self, progress: bool) -> Result<Vec<MatchDto>, AppError> {
        let dir = self.matches_dir();
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
            .map_err(|e| {
                AppError::ConfigError(format!("Cannot read {}: {}", dir.display(), e))
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
            .collect();
        paths.sort();
        info!(count = paths.len(), dir = %dir.display(), "loading match files");

        let pb = if progress {
            ProgressBar::new(paths.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_message("Loading matches");

        let mut matches = Vec::with_capacity(paths.len());
        for path in &paths {
            match read_json::<MatchDto>(path) {
                Ok(match_data) => {
                    debug!(match_id = match_data.match_id(), "loaded match");
                    matches.push(match_data);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipping match file"),
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        matches.sort_by(|a, b| b.info.game_creation.cmp(&a.info.game_creation));
        Ok(matches)
    }

    pub fn load_timeline(&self, match_id: &str) -> Result<TimelineDto, AppError> {
        let path = self.timeline_path(match_id);
        if !path.exists() {
            return Err(AppError::TimelineNotFound(match_id.to_string()));
        }
        read_json(&path)
    }

    /// Timelines for the given matches that exist on disk.
    pub fn load_timelines<'a, I>(&self, match_ids: I) -> Vec<TimelineDto>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match_ids
            .into_iter()
            .filter_map(|id| match self.load_timeline(id) {
                Ok(timeline) => Some(timeline),
                Err(AppError::TimelineNotFound(_)) => None,
                Err(e) => {
                    warn!(match_id = id, error = %e, "skipping timeline");
                    None
                }
            })
            .collect()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::JsonError(format!("Failed to parse {}: {}", path.display(), e))
    })
}
