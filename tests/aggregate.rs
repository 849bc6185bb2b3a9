mod common;

use common::{game, head_to_head, participant, OPPONENT, PLAYER};
use match_insights::analysis::champion_stats::{aggregate_stats, AggregateOptions, Kda};
use match_insights::analysis::consistency::analyze_consistency;
use match_insights::api::models::{MatchDto, ParticipantDto};
use proptest::prelude::*;

fn scored(p: ParticipantDto, kda: (u32, u32, u32), win: bool) -> ParticipantDto {
    ParticipantDto {
        kills: kda.0,
        deaths: kda.1,
        assists: kda.2,
        win,
        total_minions_killed: 150,
        neutral_minions_killed: 30,
        vision_score: Some(20),
        gold_earned: Some(10_000),
        ..p
    }
}

#[test]
fn overall_and_opponent_rollups() {
    let matches = vec![
        game(
            "NA1_1",
            vec![
                scored(participant(PLAYER, "Ahri", 100, "MIDDLE"), (5, 0, 5), true),
                scored(participant("ally", "LeeSin", 100, "JUNGLE"), (5, 2, 3), true),
                scored(participant(OPPONENT, "Zed", 200, "MIDDLE"), (1, 5, 1), false),
            ],
        ),
        game(
            "NA1_2",
            vec![
                scored(participant(OPPONENT, "Syndra", 100, "MIDDLE"), (4, 1, 2), true),
                scored(participant(PLAYER, "Ahri", 200, "MIDDLE"), (1, 4, 1), false),
                scored(participant("ally-2", "Lulu", 200, "UTILITY"), (3, 2, 2), false),
            ],
        ),
    ];

    let stats = aggregate_stats(&matches, PLAYER, AggregateOptions::default());

    assert_eq!(stats.overall.games, 2);
    assert_eq!(stats.overall.wins, 1);
    assert_eq!(stats.overall.losses(), 1);
    assert_eq!(stats.overall.kda(), Kda::Ratio(12.0 / 4.0));
    // 360 CS over 60 minutes.
    assert!((stats.overall.cs_per_minute() - 6.0).abs() < 1e-9);
    // 10/10 and 2/4 average to 75%.
    assert!((stats.overall.kill_participation() - 75.0).abs() < 1e-9);

    assert_eq!(stats.sides.blue.games, 1);
    assert_eq!(stats.sides.blue.wins, 1);
    assert_eq!(stats.sides.red.games, 1);
    assert_eq!(stats.sides.red.win_rate(), 0.0);

    assert_eq!(stats.opponent.games, 2);
    assert_eq!(stats.opponent.wins, 1);
    assert_eq!(stats.opponent.avg_gold(), 10_000.0);

    assert_eq!(stats.champions.len(), 1);
    let ahri = &stats.champions[0];
    assert_eq!(ahri.name, "Ahri");
    assert_eq!(ahri.player.games, 2);
    assert_eq!(ahri.opponent.games, 2);
}

#[test]
fn perfect_kda_when_deathless() {
    let matches = vec![game(
        "NA1_1",
        vec![scored(participant(PLAYER, "Ahri", 100, "MIDDLE"), (3, 0, 4), true)],
    )];
    let stats = aggregate_stats(&matches, PLAYER, AggregateOptions::default());
    assert!(stats.overall.kda().is_perfect());
    assert_eq!(stats.overall.kda().to_string(), "Perfect");
}

#[test]
fn empty_history_is_all_zero() {
    let stats = aggregate_stats(&[], PLAYER, AggregateOptions::default());
    assert_eq!(stats.overall.games, 0);
    assert_eq!(stats.overall.win_rate(), 0.0);
    assert_eq!(stats.overall.kda(), Kda::Ratio(0.0));
    assert_eq!(stats.overall.kill_participation(), 0.0);
    assert_eq!(stats.sides.blue.win_rate(), 0.0);
}

fn arb_match() -> impl Strategy<Value = MatchDto> {
    (
        0i64..3600,
        any::<bool>(),
        (0u32..20, 0u32..20, 0u32..30),
        (0u32..20, 0u32..20, 0u32..30),
        prop::sample::select(vec!["TOP", "JUNGLE", "MIDDLE", "BOTTOM", "UTILITY", "NONE"]),
        prop::collection::vec((0usize..4, 0.0f64..5.0, 0.0f64..5.0), 0..4),
    )
        .prop_map(|(duration, win, mine, theirs, position, metrics)| {
            let keys = ["kda", "damagePerMinute", "fastestLegendary", "visionScorePerMinute"];
            let player_values: Vec<(&str, f64)> =
                metrics.iter().map(|(k, p, _)| (keys[*k], p.round())).collect();
            let opponent_values: Vec<(&str, f64)> =
                metrics.iter().map(|(k, _, o)| (keys[*k], o.round())).collect();
            let mut m = head_to_head("NA1_X", position, ("Garen", "Darius"), &player_values, &opponent_values);
            m.info.game_duration = duration;
            m.info.participants[0] = scored(m.info.participants[0].clone(), mine, win);
            m.info.participants[1] = scored(m.info.participants[1].clone(), theirs, !win);
            m
        })
}

proptest! {
    #[test]
    fn wins_never_exceed_games(matches in prop::collection::vec(arb_match(), 0..15)) {
        let stats = aggregate_stats(&matches, PLAYER, AggregateOptions::default());
        prop_assert!(stats.overall.wins <= stats.overall.games);
        prop_assert_eq!(stats.overall.losses(), stats.overall.games - stats.overall.wins);
        prop_assert!(stats.overall.win_rate() >= 0.0 && stats.overall.win_rate() <= 100.0);
        prop_assert!(stats.overall.cs_per_minute().is_finite());

        if stats.overall.deaths == 0 && stats.overall.kills + stats.overall.assists > 0 {
            prop_assert!(stats.overall.kda().is_perfect());
        } else if let Kda::Ratio(r) = stats.overall.kda() {
            prop_assert!(r.is_finite());
        }
    }

    #[test]
    fn consistency_lists_are_disjoint_and_sampled(matches in prop::collection::vec(arb_match(), 0..15)) {
        let report = analyze_consistency(&matches, PLAYER);
        for stat in report.strengths.iter().chain(report.weaknesses.iter()) {
            prop_assert!(stat.observations() >= 3);
        }
        for strength in &report.strengths {
            prop_assert!(strength.wins > strength.losses);
            prop_assert!(report.weaknesses.iter().all(|w| w.key != strength.key));
        }
        prop_assert!(report.strengths.len() <= 10 && report.weaknesses.len() <= 10);
    }

    #[test]
    fn analysis_is_deterministic(matches in prop::collection::vec(arb_match(), 0..10)) {
        prop_assert_eq!(analyze_consistency(&matches, PLAYER), analyze_consistency(&matches, PLAYER));
        prop_assert_eq!(
            aggregate_stats(&matches, PLAYER, AggregateOptions::default()),
            aggregate_stats(&matches, PLAYER, AggregateOptions::default())
        );
    }
}
