//! Plain-text context handed to the coaching assistant.

use crate::analysis::champion_stats::{AggregateStats, PerformanceStats};
use crate::analysis::consistency::{ConsistencyReport, ConsistencyStat};
use crate::analysis::role::MainRole;
use crate::analysis::timeline::{EventSide, TimelineSummary};
use std::fmt::Write;

const BRIEFING_LIST_LIMIT: usize = 5;

fn rate_or_na(value: f64, denominator: u32) -> String {
    if denominator == 0 {
        "N/A".to_string()
    } else {
        format!("{:.1}%", value)
    }
}

fn stat_line(label: &str, stats: &PerformanceStats) -> String {
    format!(
        "{}: {} games, {} winrate, KDA {} ({:.1}/{:.1}/{:.1}), {:.1} CS/min, {} KP, {:.1} vision",
        label,
        stats.games,
        rate_or_na(stats.win_rate(), stats.games),
        stats.kda(),
        stats.avg_kills(),
        stats.avg_deaths(),
        stats.avg_assists(),
        stats.cs_per_minute(),
        rate_or_na(stats.kill_participation(), stats.games),
        stats.avg_vision_score(),
    )
}

fn metric_line(stat: &ConsistencyStat, rate: f64) -> String {
    format!(
        "- {}: {:.1}% ({}W/{}L/{}T)",
        stat.key, rate, stat.wins, stat.losses, stat.ties
    )
}

pub fn build_briefing(
    stats: &AggregateStats,
    consistency: &ConsistencyReport,
    timeline: Option<&TimelineSummary>,
) -> String {
    let mut out = String::new();

    let role = match consistency.main_role {
        Some(MainRole::Single(role)) => role.to_string(),
        Some(MainRole::Multirole) => "multirole".to_string(),
        None => "unknown".to_string(),
    };
    let _ = writeln!(out, "Main role: {}", role);
    let _ = writeln!(out, "{}", stat_line("Player", &stats.overall));
    let _ = writeln!(out, "{}", stat_line("Lane opponents", &stats.opponent));
    let _ = writeln!(
        out,
        "Side winrate: blue {} ({} games), red {} ({} games)",
        rate_or_na(stats.sides.blue.win_rate(), stats.sides.blue.games),
        stats.sides.blue.games,
        rate_or_na(stats.sides.red.win_rate(), stats.sides.red.games),
        stats.sides.red.games,
    );

    if !stats.champions.is_empty() {
        let _ = writeln!(out, "\nChampions:");
        for champion in stats.champions.iter().take(BRIEFING_LIST_LIMIT) {
            let _ = writeln!(out, "- {}", stat_line(&champion.name, &champion.player));
        }
    }

    if consistency.strengths.is_empty() && consistency.weaknesses.is_empty() {
        let _ = writeln!(out, "\nNo consistent strengths or weaknesses against lane opponents.");
    } else {
        let _ = writeln!(
            out,
            "\nCompared against lane opponents in {} games.",
            consistency.matches_compared
        );
        let _ = writeln!(out, "Strengths:");
        for stat in consistency.strengths.iter().take(BRIEFING_LIST_LIMIT) {
            let _ = writeln!(out, "{}", metric_line(stat, stat.consistency()));
        }
        let _ = writeln!(out, "Weaknesses:");
        for stat in consistency.weaknesses.iter().take(BRIEFING_LIST_LIMIT) {
            let _ = writeln!(out, "{}", metric_line(stat, stat.loss_consistency()));
        }
    }

    if let Some(summary) = timeline {
        write_timeline(&mut out, summary);
    }

    out
}

fn write_timeline(out: &mut String, summary: &TimelineSummary) {
    let _ = writeln!(out, "\nMatch {} timeline:", summary.match_id);

    let build: Vec<String> = summary
        .build
        .iter()
        .map(|cluster| {
            let items: Vec<String> = cluster.items.iter().map(|i| i.item_id.to_string()).collect();
            format!("{} [{}]", cluster.clock(), items.join(", "))
        })
        .collect();
    let _ = writeln!(out, "Build: {}", build.join(" -> "));

    let max_order: Vec<String> = summary.skills.max_order.iter().map(|s| s.to_string()).collect();
    let _ = writeln!(out, "Skill max order: {}", max_order.join(" > "));

    if let Some(last) = summary.gold.iter().rev().find(|p| p.gold_diff.is_some()) {
        let _ = writeln!(
            out,
            "Gold difference at {} min: {:+}",
            last.minute,
            last.gold_diff.unwrap_or_default()
        );
    }

    for marker in &summary.markers {
        let side = match marker.side {
            EventSide::Player => "player",
            EventSide::Opponent => "opponent",
            EventSide::Both => "both",
        };
        let _ = writeln!(
            out,
            "- {} {} -> {} ({})",
            marker.clock, marker.actor, marker.target, side
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_degrade_to_placeholders() {
        let text = build_briefing(&AggregateStats::default(), &ConsistencyReport::default(), None);
        assert!(text.contains("Main role: unknown"));
        assert!(text.contains("N/A"));
        assert!(text.contains("No consistent strengths"));
    }

    #[test]
    fn perfect_kda_is_spelled_out() {
        let mut stats = AggregateStats::default();
        stats.overall.games = 1;
        stats.overall.wins = 1;
        stats.overall.kills = 4;
        let text = build_briefing(&stats, &ConsistencyReport::default(), None);
        assert!(text.contains("KDA Perfect"));
        assert!(text.contains("100.0% winrate"));
    }
}
