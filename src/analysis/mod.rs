pub mod archetype;
pub mod briefing;
pub mod champion_stats;
pub mod consistency;
pub mod heatmap;
pub mod metric_rules;
pub mod role;
pub mod timeline;
