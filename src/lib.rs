//! Match performance analytics: role and lane-opponent resolution, aggregate
//! and per-champion stats, head-to-head consistency scoring, and timeline
//! summaries for a player's match history.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use analysis::champion_stats::{aggregate_stats, AggregateOptions, AggregateStats, Kda};
pub use analysis::consistency::{analyze_consistency, ConsistencyReport, ConsistencyStat};
pub use analysis::heatmap::{Heatmap, HeatmapKind};
pub use analysis::role::{find_lane_opponent, resolve_main_role, MainRole};
pub use analysis::timeline::{summarize_against_lane_opponent, summarize_timeline, TimelineSummary};
