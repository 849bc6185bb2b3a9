mod common;

use common::{game, participant, OPPONENT, PLAYER};
use match_insights::analysis::timeline::{
    build_order, skill_order, summarize_against_lane_opponent, summarize_timeline, EventSide,
    MarkerKind, SkillSlot,
};
use match_insights::api::models::MatchDto;
use match_insights::api::timeline::{
    EventDto, FrameDto, ParticipantFrame, TimelineDto, TimelineInfo, TimelineMetadata,
    TimelineParticipant,
};
use std::collections::BTreeMap;

const MIN: i64 = 60_000;

fn lane_match() -> MatchDto {
    game(
        "NA1_100",
        vec![
            participant(PLAYER, "Ahri", 100, "MIDDLE"),
            participant("ally-jungle", "LeeSin", 100, "JUNGLE"),
            participant(OPPONENT, "Zed", 200, "MIDDLE"),
            participant("enemy-jungle", "Viego", 200, "JUNGLE"),
        ],
    )
}

fn gold_frame(timestamp: i64, gold: &[(i32, i32)], events: Vec<EventDto>) -> FrameDto {
    let participant_frames: BTreeMap<String, ParticipantFrame> = gold
        .iter()
        .map(|(slot, total_gold)| {
            (
                slot.to_string(),
                ParticipantFrame {
                    total_gold: *total_gold,
                    ..Default::default()
                },
            )
        })
        .collect();
    FrameDto {
        timestamp,
        participant_frames,
        events,
    }
}

fn timeline(frames: Vec<FrameDto>) -> TimelineDto {
    let slots = [(1, PLAYER), (2, "ally-jungle"), (6, OPPONENT), (7, "enemy-jungle")];
    TimelineDto {
        metadata: TimelineMetadata {
            match_id: "NA1_100".to_string(),
            participants: vec![],
        },
        info: TimelineInfo {
            frame_interval: MIN,
            frames,
            participants: slots
                .iter()
                .map(|(id, puuid)| TimelineParticipant {
                    participant_id: *id,
                    puuid: puuid.to_string(),
                })
                .collect(),
        },
    }
}

fn purchase(timestamp: i64, slot: i32, item_id: i32) -> EventDto {
    EventDto::ItemPurchased {
        timestamp,
        participant_id: slot,
        item_id,
    }
}

fn skill(timestamp: i64, slot: i32, skill_slot: i32) -> EventDto {
    EventDto::SkillLevelUp {
        timestamp,
        participant_id: slot,
        skill_slot,
        level_up_type: "NORMAL".to_string(),
    }
}

fn kill(timestamp: i64, killer_id: i32, victim_id: i32, assists: Vec<i32>) -> EventDto {
    EventDto::ChampionKill {
        timestamp,
        killer_id,
        victim_id,
        assisting_participant_ids: assists,
        position: None,
    }
}

#[test]
fn purchases_a_minute_apart_share_a_cluster() {
    let tl = timeline(vec![gold_frame(
        0,
        &[],
        vec![purchase(2 * MIN + 10_000, 1, 1055), purchase(3 * MIN + 5_000, 1, 2003)],
    )]);
    let clusters = build_order(&tl, 1);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].items.len(), 2);
    assert_eq!(clusters[0].clock(), "2:10");
}

#[test]
fn purchases_far_apart_are_separate_clusters() {
    let tl = timeline(vec![gold_frame(
        0,
        &[],
        vec![
            purchase(2 * MIN, 1, 1055),
            purchase(10 * MIN, 1, 3006),
            purchase(10 * MIN + 500, 6, 1036),
        ],
    )]);
    let clusters = build_order(&tl, 1);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[1].minute(), 10);
    assert_eq!(clusters[1].items, vec![match_insights::analysis::timeline::BuildItem {
        timestamp_ms: 10 * MIN,
        item_id: 3006,
    }]);
}

#[test]
fn skill_max_order_ranks_by_points() {
    let events = vec![
        skill(1_000, 1, 1),
        skill(2 * MIN, 1, 3),
        skill(3 * MIN, 1, 2),
        skill(4 * MIN, 1, 1),
        skill(5 * MIN, 1, 1),
        skill(6 * MIN, 1, 4),
        skill(7 * MIN, 1, 3),
        skill(8 * MIN, 6, 2),
        EventDto::SkillLevelUp {
            timestamp: 9 * MIN,
            participant_id: 1,
            skill_slot: 4,
            level_up_type: "EVOLVE".to_string(),
        },
    ];
    let tl = timeline(vec![gold_frame(0, &[], events)]);
    let order = skill_order(&tl, 1);

    assert_eq!(order.level_ups.len(), 7);
    assert_eq!(order.max_order, vec![SkillSlot::Q, SkillSlot::E, SkillSlot::W]);
    let ultimates: Vec<_> = order.level_ups.iter().filter(|l| l.is_ultimate).collect();
    assert_eq!(ultimates.len(), 1);
    assert_eq!(ultimates[0].skill, SkillSlot::R);
}

#[test]
fn annotated_events_and_gold_lead() {
    let frames = vec![
        gold_frame(0, &[(1, 500), (6, 500)], vec![]),
        gold_frame(
            MIN + 20,
            &[(1, 1100), (6, 900)],
            vec![],
        ),
        gold_frame(
            2 * MIN + 20,
            &[(1, 1900), (6, 1500)],
            vec![
                // Player solo kills the opponent.
                kill(MIN + 30_000, 1, 6, vec![]),
                // Jungler fight the laners were not part of.
                kill(MIN + 40_000, 7, 2, vec![]),
                EventDto::EliteMonsterKill {
                    timestamp: 2 * MIN + 5_000,
                    killer_id: 7,
                    assisting_participant_ids: vec![6],
                    monster_type: "DRAGON".to_string(),
                    monster_sub_type: Some("FIRE_DRAGON".to_string()),
                },
            ],
        ),
        gold_frame(
            3 * MIN + 20,
            &[(1, 2500), (6, 2800)],
            vec![
                EventDto::BuildingKill {
                    timestamp: 3 * MIN + 1_000,
                    killer_id: 0,
                    assisting_participant_ids: vec![1, 6],
                    team_id: 200,
                    building_type: "TOWER_BUILDING".to_string(),
                    lane_type: "MID_LANE".to_string(),
                    tower_type: Some("OUTER_TURRET".to_string()),
                },
                // Unknown slot: skipped rather than failing the summary.
                kill(3 * MIN + 2_000, 42, 1, vec![]),
            ],
        ),
    ];
    let tl = timeline(frames);
    let summary = summarize_against_lane_opponent(&lane_match(), &tl, PLAYER).unwrap();

    assert_eq!(summary.player_slot, 1);
    assert_eq!(summary.opponent_slot, Some(6));

    assert_eq!(summary.markers.len(), 3);
    let kill_marker = &summary.markers[0];
    assert_eq!(kill_marker.kind, MarkerKind::ChampionKill);
    assert_eq!(kill_marker.side, EventSide::Both);
    assert_eq!(kill_marker.actor, "Ahri");
    assert_eq!(kill_marker.target, "Zed");
    assert_eq!(kill_marker.clock, "1:30");

    let dragon = &summary.markers[1];
    assert_eq!(dragon.side, EventSide::Opponent);
    assert_eq!(dragon.actor, "Viego");
    assert_eq!(dragon.target, "Fire Dragon");

    let tower = &summary.markers[2];
    assert_eq!(tower.side, EventSide::Both);
    assert_eq!(tower.actor, "Minions");
    assert_eq!(tower.target, "Mid Lane Outer Turret");

    let diffs: Vec<_> = summary.gold.iter().map(|p| (p.minute, p.gold_diff)).collect();
    assert_eq!(
        diffs,
        vec![(0, Some(0)), (1, Some(200)), (2, Some(400)), (3, Some(-300))]
    );
    assert_eq!(summary.gold[1].markers.len(), 1);
    assert_eq!(summary.gold[2].markers.len(), 1);
    assert_eq!(summary.gold[3].markers.len(), 1);
}

#[test]
fn missing_opponent_still_produces_player_series() {
    let tl = timeline(vec![gold_frame(0, &[(1, 500)], vec![]), gold_frame(MIN, &[(1, 900)], vec![])]);
    let summary = summarize_timeline(&lane_match(), &tl, PLAYER, None).unwrap();
    assert_eq!(summary.opponent_slot, None);
    assert_eq!(summary.gold.len(), 2);
    assert!(summary.gold.iter().all(|p| p.gold_diff.is_none()));
}

#[test]
fn unresolvable_player_yields_nothing() {
    let tl = timeline(vec![gold_frame(0, &[(1, 500)], vec![])]);
    assert!(summarize_timeline(&lane_match(), &tl, "stranger", None).is_none());
}

#[test]
fn slot_falls_back_to_metadata_order() {
    let mut tl = timeline(vec![gold_frame(0, &[(1, 500), (2, 450)], vec![])]);
    tl.info.participants.clear();
    tl.metadata.participants = vec![PLAYER.to_string(), OPPONENT.to_string()];

    let summary = summarize_timeline(&lane_match(), &tl, OPPONENT, Some(PLAYER)).unwrap();
    assert_eq!(summary.player_slot, 2);
    assert_eq!(summary.opponent_slot, Some(1));
    assert_eq!(summary.gold[0].gold_diff, Some(-50));
}

#[test]
fn closing_frame_replaces_same_minute_point() {
    let tl = timeline(vec![
        gold_frame(25 * MIN + 10, &[(1, 9000), (6, 9000)], vec![]),
        gold_frame(25 * MIN + 31_000, &[(1, 9800), (6, 9100)], vec![]),
    ]);
    let summary = summarize_against_lane_opponent(&lane_match(), &tl, PLAYER).unwrap();
    assert_eq!(summary.gold.len(), 1);
    assert_eq!(summary.gold[0].gold_diff, Some(700));
}
