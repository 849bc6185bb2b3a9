mod display;

use anyhow::Context;
use clap::Parser;
use display::output::{
    display_champion_stats, display_consistency, display_error, display_heatmap, display_info,
    display_match_history, display_overview, display_success, display_timeline,
};
use match_insights::analysis::briefing::build_briefing;
use match_insights::analysis::champion_stats::{aggregate_stats, AggregateOptions};
use match_insights::analysis::consistency::analyze_consistency;
use match_insights::analysis::heatmap::Heatmap;
use match_insights::analysis::timeline::summarize_against_lane_opponent;
use match_insights::config::Config;
use match_insights::error::AppError;
use match_insights::store::MatchStore;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "Match Insights")]
#[command(about = "Analyze stored matches against your lane opponents", long_about = None)]
struct Args {
    /// Player PUUID
    puuid: String,

    /// Directory holding matches/ and timelines/ (default: ~/.match_insights)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Number of recent matches used for overall stats (default: 20)
    #[arg(short, long)]
    recent: Option<usize>,

    /// Number of strengths/weaknesses to display (default: 5)
    #[arg(short, long)]
    top_n: Option<usize>,

    /// Leave remade games out of the overall stats
    #[arg(long)]
    exclude_remakes: bool,

    /// Show the timeline report for one match
    #[arg(long, value_name = "MATCH_ID")]
    timeline: Option<String>,

    /// Show heatmap sample counts across stored timelines
    #[arg(long)]
    heatmap: bool,

    /// Only count heatmap samples up to this minute
    #[arg(long, requires = "heatmap")]
    until_minute: Option<i64>,

    /// Print the plain-text briefing for the coaching assistant
    #[arg(long)]
    briefing: bool,
}

fn main() {
    setup_tracing_subscriber();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(dir) = args.dir {
        config.data_dir = dir;
    }
    if let Some(recent) = args.recent {
        config.recent_matches = recent;
    }
    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }
    config.exclude_remakes |= args.exclude_remakes;
    info!(?config, "configuration loaded");

    display_info(&format!("Reading matches from {}", config.data_dir.display()));
    let store = MatchStore::new(&config.data_dir);
    let matches = store.load_matches(true)?;

    let player_matches: Vec<_> = matches
        .into_iter()
        .filter(|m| m.participant(&args.puuid).is_some())
        .collect();
    if player_matches.is_empty() {
        return Err(AppError::PlayerNotFound(args.puuid).into());
    }
    display_success(&format!("Found {} matches for this player", player_matches.len()));

    let stats = aggregate_stats(
        &player_matches,
        &args.puuid,
        AggregateOptions {
            recent_limit: Some(config.recent_matches),
            exclude_remakes: config.exclude_remakes,
        },
    );
    let consistency = analyze_consistency(&player_matches, &args.puuid);

    let recent = &player_matches[..config.recent_matches.min(player_matches.len())];
    display_match_history(recent, &args.puuid);
    display_overview(&stats);
    display_champion_stats(&stats.champions);
    display_consistency(&consistency, config.top_n);

    let summary = match &args.timeline {
        Some(match_id) => {
            let match_data = player_matches
                .iter()
                .find(|m| m.match_id() == match_id)
                .ok_or_else(|| AppError::MatchNotFound(match_id.clone()))?;
            let timeline = store
                .load_timeline(match_id)
                .with_context(|| format!("loading timeline for {}", match_id))?;
            let summary = summarize_against_lane_opponent(match_data, &timeline, &args.puuid);
            match &summary {
                Some(summary) => display_timeline(summary),
                None => display_info("Player has no slot in this timeline"),
            }
            summary
        }
        None => None,
    };

    if args.heatmap {
        let timelines = store.load_timelines(recent.iter().map(|m| m.match_id()));
        info!(count = timelines.len(), "timelines loaded for heatmap");
        let heatmap = Heatmap::collect(&timelines, &args.puuid);
        display_heatmap(&heatmap, args.until_minute);
    }

    if args.briefing {
        println!("{}", build_briefing(&stats, &consistency, summary.as_ref()));
    }

    Ok(())
}
