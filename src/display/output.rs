use chrono::{TimeZone, Utc};
use colored::*;
use match_insights::analysis::champion_stats::{AggregateStats, ChampionStats, PerformanceStats};
use match_insights::analysis::consistency::{ConsistencyReport, ConsistencyStat};
use match_insights::analysis::heatmap::{Heatmap, HeatmapKind};
use match_insights::analysis::role::MainRole;
use match_insights::analysis::timeline::{EventSide, TimelineSummary};
use match_insights::api::models::MatchDto;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    played: String,
    champion: String,
    role: String,
    result: String,
    kda: String,
    cs: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    stat: String,
    you: String,
    opponent: String,
}

#[derive(Tabled)]
struct ChampionRow {
    champion: String,
    games: String,
    win_rate: String,
    kda: String,
    cs_min: String,
    kp: String,
}

#[derive(Tabled)]
struct MetricRow {
    rank: String,
    metric: String,
    rate: String,
    record: String,
}

#[derive(Tabled)]
struct MarkerRow {
    time: String,
    side: String,
    actor: String,
    target: String,
}

#[derive(Tabled)]
struct GoldRow {
    minute: String,
    you: String,
    opponent: String,
    diff: String,
    events: String,
}

#[derive(Tabled)]
struct HeatmapRow {
    kind: String,
    samples: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn header(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

pub fn display_match_history(matches: &[MatchDto], puuid: &str) {
    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .filter_map(|(idx, m)| {
            let p = m.participant(puuid)?;
            let played = Utc
                .timestamp_millis_opt(m.info.game_creation)
                .single()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let result = if p.game_ended_in_early_surrender {
                "REMAKE".yellow().to_string()
            } else if p.win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            };
            Some(MatchRow {
                number: format!("{}", idx + 1),
                played,
                champion: p.champion_name.clone(),
                role: p.role().map_or("-".to_string(), |r| r.to_string()),
                result,
                kda: format!("{}/{}/{}", p.kills, p.deaths, p.assists),
                cs: p.creep_score().to_string(),
            })
        })
        .collect();

    header(&format!("📊 MATCH HISTORY (Last {} Games)", rows.len()), 80);
    if rows.is_empty() {
        println!("{}", "No matches found for this player".yellow());
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn comparison(stat: &str, you: String, opponent: String) -> ComparisonRow {
    ComparisonRow {
        stat: stat.to_string(),
        you,
        opponent,
    }
}

fn per_game(stats: &PerformanceStats) -> String {
    format!(
        "{:.1} / {:.1} / {:.1}",
        stats.avg_kills(),
        stats.avg_deaths(),
        stats.avg_assists()
    )
}

pub fn display_overview(stats: &AggregateStats) {
    header("📈 OVERALL VS LANE OPPONENTS", 60);

    let you = &stats.overall;
    let opp = &stats.opponent;
    println!(
        "{} {} W / {} L ({:.1}% WR)\n",
        "Record:".bold(),
        you.wins.to_string().green(),
        you.losses().to_string().red(),
        you.win_rate()
    );

    let rows = vec![
        comparison("Games", you.games.to_string(), opp.games.to_string()),
        comparison("KDA", you.kda().to_string(), opp.kda().to_string()),
        comparison("K / D / A", per_game(you), per_game(opp)),
        comparison(
            "CS/min",
            format!("{:.1}", you.cs_per_minute()),
            format!("{:.1}", opp.cs_per_minute()),
        ),
        comparison(
            "Kill participation",
            format!("{:.1}%", you.kill_participation()),
            format!("{:.1}%", opp.kill_participation()),
        ),
        comparison(
            "Vision score",
            format!("{:.1}", you.avg_vision_score()),
            format!("{:.1}", opp.avg_vision_score()),
        ),
        comparison(
            "Gold",
            format!("{:.0}", you.avg_gold()),
            format!("{:.0}", opp.avg_gold()),
        ),
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n{} blue {:.1}% ({} games) · red {:.1}% ({} games)\n",
        "Side winrate:".bold(),
        stats.sides.blue.win_rate(),
        stats.sides.blue.games,
        stats.sides.red.win_rate(),
        stats.sides.red.games
    );
}

pub fn display_champion_stats(champions: &[ChampionStats]) {
    if champions.is_empty() {
        return;
    }
    header("🏆 CHAMPION STATS", 60);

    let rows: Vec<ChampionRow> = champions
        .iter()
        .map(|c| ChampionRow {
            champion: c.name.clone(),
            games: c.player.games.to_string(),
            win_rate: format!("{:.1}%", c.player.win_rate()),
            kda: c.player.kda().to_string(),
            cs_min: format!("{:.1}", c.player.cs_per_minute()),
            kp: format!("{:.1}%", c.player.kill_participation()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn metric_rows(stats: &[ConsistencyStat], top_n: usize, rate: fn(&ConsistencyStat) -> f64) -> Vec<MetricRow> {
    stats
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, s)| MetricRow {
            rank: format!("#{}", idx + 1),
            metric: s.key.clone(),
            rate: format!("{:.1}%", rate(s)),
            record: format!("{}W / {}L / {}T", s.wins, s.losses, s.ties),
        })
        .collect()
}

pub fn display_consistency(report: &ConsistencyReport, top_n: usize) {
    header("🎯 STRENGTHS & WEAKNESSES VS LANE OPPONENT", 60);

    let role = match report.main_role {
        Some(MainRole::Single(role)) => role.to_string(),
        Some(MainRole::Multirole) => "Multirole (all games)".to_string(),
        None => "Unknown".to_string(),
    };
    println!(
        "{} {} · {} games compared\n",
        "Main role:".bold(),
        role,
        report.matches_compared
    );

    if report.strengths.is_empty() && report.weaknesses.is_empty() {
        println!(
            "{}",
            "Not enough head-to-head data against lane opponents".yellow()
        );
        return;
    }

    for (title, rows) in [
        ("Strengths".bold().green(), metric_rows(&report.strengths, top_n, ConsistencyStat::consistency)),
        ("Weaknesses".bold().red(), metric_rows(&report.weaknesses, top_n, ConsistencyStat::loss_consistency)),
    ] {
        println!("{}", title);
        if rows.is_empty() {
            println!("  none\n");
            continue;
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }
}

fn side_label(side: EventSide) -> String {
    match side {
        EventSide::Player => "you".green().to_string(),
        EventSide::Opponent => "opponent".red().to_string(),
        EventSide::Both => "both".yellow().to_string(),
    }
}

pub fn display_timeline(summary: &TimelineSummary) {
    header(&format!("⏱️  TIMELINE {}", summary.match_id), 60);

    println!("{}", "Build order".bold().yellow());
    for (idx, cluster) in summary.build.iter().enumerate() {
        let items: Vec<String> = cluster.items.iter().map(|i| i.item_id.to_string()).collect();
        println!("  {}. {} → {}", idx + 1, cluster.clock(), items.join(", "));
    }

    let sequence: Vec<String> = summary
        .skills
        .level_ups
        .iter()
        .map(|l| {
            if l.is_ultimate {
                l.skill.to_string().bold().magenta().to_string()
            } else {
                l.skill.to_string()
            }
        })
        .collect();
    let max_order: Vec<String> = summary.skills.max_order.iter().map(|s| s.to_string()).collect();
    println!("\n{}", "Skill order".bold().yellow());
    println!("  {}", sequence.join(" "));
    println!("  Max: {}\n", max_order.join(" > "));

    if !summary.markers.is_empty() {
        let rows: Vec<MarkerRow> = summary
            .markers
            .iter()
            .map(|m| MarkerRow {
                time: m.clock.clone(),
                side: side_label(m.side),
                actor: m.actor.clone(),
                target: m.target.clone(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    let rows: Vec<GoldRow> = summary
        .gold
        .iter()
        .map(|p| {
            let diff = match p.gold_diff {
                Some(d) if d > 0 => format!("{:+}", d).green().to_string(),
                Some(d) if d < 0 => format!("{:+}", d).red().to_string(),
                Some(d) => d.to_string(),
                None => "-".to_string(),
            };
            GoldRow {
                minute: p.minute.to_string(),
                you: p.player_gold.to_string(),
                opponent: p.opponent_gold.map_or("-".to_string(), |g| g.to_string()),
                diff,
                events: p.markers.len().to_string(),
            }
        })
        .collect();
    if !rows.is_empty() {
        println!("{}", "Gold lead".bold().yellow());
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }
}

pub fn display_heatmap(heatmap: &Heatmap, max_minute: Option<i64>) {
    let title = match max_minute {
        Some(minute) => format!("🗺️  HEATMAP SAMPLES (up to {} min)", minute),
        None => "🗺️  HEATMAP SAMPLES".to_string(),
    };
    header(&title, 60);

    let counts = heatmap.counts(max_minute);
    let rows: Vec<HeatmapRow> = HeatmapKind::ALL
        .iter()
        .map(|kind| HeatmapRow {
            kind: kind.label().to_string(),
            samples: counts.get(kind).copied().unwrap_or(0).to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
