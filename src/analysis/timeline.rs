use crate::analysis::role::find_lane_opponent;
use crate::api::models::MatchDto;
use crate::api::timeline::{EventDto, TimelineDto};
use chrono::Duration;
use std::collections::BTreeMap;
use std::fmt;

const MS_PER_MINUTE: i64 = 60_000;

pub fn minute_of(timestamp_ms: i64) -> i64 {
    timestamp_ms.max(0) / MS_PER_MINUTE
}

/// `m:ss` game clock.
pub fn format_clock(timestamp_ms: i64) -> String {
    let elapsed = Duration::milliseconds(timestamp_ms.max(0));
    format!("{}:{:02}", elapsed.num_minutes(), elapsed.num_seconds() % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildItem {
    pub timestamp_ms: i64,
    pub item_id: i32,
}

/// Purchases made in one trip to the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecallCluster {
    pub items: Vec<BuildItem>,
}

impl RecallCluster {
    pub fn minute(&self) -> i64 {
        self.items.first().map_or(0, |i| minute_of(i.timestamp_ms))
    }

    pub fn clock(&self) -> String {
        format_clock(self.items.first().map_or(0, |i| i.timestamp_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillSlot {
    Q,
    W,
    E,
    R,
}

impl SkillSlot {
    pub fn from_slot(slot: i32) -> Option<SkillSlot> {
        match slot {
            1 => Some(SkillSlot::Q),
            2 => Some(SkillSlot::W),
            3 => Some(SkillSlot::E),
            4 => Some(SkillSlot::R),
            _ => None,
        }
    }

    pub fn is_ultimate(&self) -> bool {
        matches!(self, SkillSlot::R)
    }
}

impl fmt::Display for SkillSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            SkillSlot::Q => "Q",
            SkillSlot::W => "W",
            SkillSlot::E => "E",
            SkillSlot::R => "R",
        };
        f.write_str(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevelUp {
    pub timestamp_ms: i64,
    pub skill: SkillSlot,
    pub is_ultimate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillOrder {
    pub level_ups: Vec<SkillLevelUp>,
    /// Q/W/E ranked by points spent, most first
    pub max_order: Vec<SkillSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSide {
    Player,
    Opponent,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    ChampionKill,
    Building,
    EpicMonster,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineMarker {
    pub timestamp_ms: i64,
    pub clock: String,
    pub kind: MarkerKind,
    pub side: EventSide,
    pub actor: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldPoint {
    pub minute: i64,
    pub player_gold: i32,
    pub opponent_gold: Option<i32>,
    /// Player minus opponent
    pub gold_diff: Option<i32>,
    pub markers: Vec<TimelineMarker>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSummary {
    pub match_id: String,
    pub player_slot: i32,
    pub opponent_slot: Option<i32>,
    pub build: Vec<RecallCluster>,
    pub skills: SkillOrder,
    pub markers: Vec<TimelineMarker>,
    pub gold: Vec<GoldPoint>,
}

/// Slot -> champion name, built from the timeline's participant list and the
/// match's participants.
pub struct SlotNames(BTreeMap<i32, String>);

impl SlotNames {
    pub fn new(match_data: &MatchDto, timeline: &TimelineDto) -> Self {
        let mut names = BTreeMap::new();
        for p in &match_data.info.participants {
            let slot = timeline.slot_of(&p.puuid).or_else(|| {
                (p.participant_id > 0).then_some(p.participant_id)
            });
            if let Some(slot) = slot {
                names.insert(slot, p.champion_name.clone());
            }
        }
        SlotNames(names)
    }

    pub fn knows(&self, slot: i32) -> bool {
        self.0.contains_key(&slot)
    }

    pub fn name(&self, slot: i32) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }
}

/// Summarise one match's timeline from the player's point of view. Returns
/// `None` when the player has no slot in the timeline.
pub fn summarize_timeline(
    match_data: &MatchDto,
    timeline: &TimelineDto,
    player_puuid: &str,
    opponent_puuid: Option<&str>,
) -> Option<TimelineSummary> {
    let Some(player_slot) = timeline.slot_of(player_puuid) else {
        tracing::debug!(match_id = timeline.match_id(), "player has no timeline slot");
        return None;
    };
    let opponent_slot = opponent_puuid.and_then(|puuid| timeline.slot_of(puuid));
    let names = SlotNames::new(match_data, timeline);

    let markers = annotate_events(timeline, &names, player_slot, opponent_slot);
    let gold = gold_series(timeline, player_slot, opponent_slot, &markers);

    Some(TimelineSummary {
        match_id: timeline.match_id().to_string(),
        player_slot,
        opponent_slot,
        build: build_order(timeline, player_slot),
        skills: skill_order(timeline, player_slot),
        markers,
        gold,
    })
}

/// [`summarize_timeline`] against the player's resolved lane opponent.
pub fn summarize_against_lane_opponent(
    match_data: &MatchDto,
    timeline: &TimelineDto,
    player_puuid: &str,
) -> Option<TimelineSummary> {
    let opponent = match_data
        .participant(player_puuid)
        .and_then(|player| find_lane_opponent(match_data, player));
    summarize_timeline(
        match_data,
        timeline,
        player_puuid,
        opponent.map(|o| o.puuid.as_str()),
    )
}

fn events(timeline: &TimelineDto) -> impl Iterator<Item = &EventDto> {
    timeline.info.frames.iter().flat_map(|f| f.events.iter())
}

/// Item purchases grouped into recall clusters. A purchase joins the current
/// cluster when it lands within one minute of the previous purchase.
pub fn build_order(timeline: &TimelineDto, slot: i32) -> Vec<RecallCluster> {
    let mut purchases: Vec<BuildItem> = events(timeline)
        .filter_map(|event| match event {
            EventDto::ItemPurchased {
                timestamp,
                participant_id,
                item_id,
            } if *participant_id == slot => Some(BuildItem {
                timestamp_ms: *timestamp,
                item_id: *item_id,
            }),
            _ => None,
        })
        .collect();
    purchases.sort_by_key(|p| p.timestamp_ms);

    let mut clusters: Vec<RecallCluster> = Vec::new();
    for item in purchases {
        let joins_last = clusters
            .last()
            .and_then(|c| c.items.last())
            .map_or(false, |prev| {
                minute_of(item.timestamp_ms) - minute_of(prev.timestamp_ms) <= 1
            });
        match clusters.last_mut() {
            Some(cluster) if joins_last => cluster.items.push(item),
            _ => clusters.push(RecallCluster { items: vec![item] }),
        }
    }
    clusters
}

pub fn skill_order(timeline: &TimelineDto, slot: i32) -> SkillOrder {
    let mut level_ups: Vec<SkillLevelUp> = events(timeline)
        .filter_map(|event| match event {
            EventDto::SkillLevelUp {
                timestamp,
                participant_id,
                skill_slot,
                level_up_type,
            } if *participant_id == slot && level_up_type != "EVOLVE" => {
                let skill = SkillSlot::from_slot(*skill_slot)?;
                Some(SkillLevelUp {
                    timestamp_ms: *timestamp,
                    skill,
                    is_ultimate: skill.is_ultimate(),
                })
            }
            _ => None,
        })
        .collect();
    level_ups.sort_by_key(|l| l.timestamp_ms);

    let mut max_order = vec![SkillSlot::Q, SkillSlot::W, SkillSlot::E];
    let points = |skill: SkillSlot| level_ups.iter().filter(|l| l.skill == skill).count();
    // Equal points: the ability that was finished first was the one being maxed.
    let finished_at = |skill: SkillSlot| {
        level_ups
            .iter()
            .filter(|l| l.skill == skill)
            .map(|l| l.timestamp_ms)
            .last()
            .unwrap_or(i64::MAX)
    };
    max_order.sort_by(|a, b| {
        points(*b)
            .cmp(&points(*a))
            .then(finished_at(*a).cmp(&finished_at(*b)))
    });

    SkillOrder {
        level_ups,
        max_order,
    }
}

fn side_for(involved: &[i32], player_slot: i32, opponent_slot: Option<i32>) -> Option<EventSide> {
    let player = involved.contains(&player_slot);
    let opponent = opponent_slot.map_or(false, |slot| involved.contains(&slot));
    match (player, opponent) {
        (true, true) => Some(EventSide::Both),
        (true, false) => Some(EventSide::Player),
        (false, true) => Some(EventSide::Opponent),
        (false, false) => None,
    }
}

/// Kills, structures and epic monsters the player or opponent took part in,
/// sorted by time.
pub fn annotate_events(
    timeline: &TimelineDto,
    names: &SlotNames,
    player_slot: i32,
    opponent_slot: Option<i32>,
) -> Vec<TimelineMarker> {
    let mut markers = Vec::new();

    for event in events(timeline) {
        let (timestamp, kind, involved, actor, target) = match event {
            EventDto::ChampionKill {
                timestamp,
                killer_id,
                victim_id,
                assisting_participant_ids,
                ..
            } => {
                let mut involved = vec![*killer_id, *victim_id];
                involved.extend(assisting_participant_ids);
                let Some(victim) = names.name(*victim_id) else {
                    tracing::trace!(victim_id, "skipping kill with unknown victim");
                    continue;
                };
                (*timestamp, MarkerKind::ChampionKill, involved, *killer_id, victim.to_string())
            }
            EventDto::BuildingKill {
                timestamp,
                killer_id,
                assisting_participant_ids,
                building_type,
                lane_type,
                tower_type,
                ..
            } => {
                let mut involved = vec![*killer_id];
                involved.extend(assisting_participant_ids);
                (
                    *timestamp,
                    MarkerKind::Building,
                    involved,
                    *killer_id,
                    building_label(building_type, lane_type, tower_type.as_deref()),
                )
            }
            EventDto::EliteMonsterKill {
                timestamp,
                killer_id,
                assisting_participant_ids,
                monster_type,
                monster_sub_type,
            } => {
                let mut involved = vec![*killer_id];
                involved.extend(assisting_participant_ids);
                let monster = monster_sub_type.as_deref().unwrap_or(monster_type.as_str());
                (*timestamp, MarkerKind::EpicMonster, involved, *killer_id, humanize(monster))
            }
            _ => continue,
        };

        // Slot 0 is a minion, turret or monster.
        if involved.iter().any(|&slot| slot != 0 && !names.knows(slot)) {
            tracing::trace!(timestamp, "skipping event with unknown slot");
            continue;
        }
        let Some(side) = side_for(&involved, player_slot, opponent_slot) else {
            continue;
        };
        let actor = match names.name(actor) {
            Some(name) => name.to_string(),
            None if kind == MarkerKind::ChampionKill => "Execution".to_string(),
            None => "Minions".to_string(),
        };

        markers.push(TimelineMarker {
            timestamp_ms: timestamp,
            clock: format_clock(timestamp),
            kind,
            side,
            actor,
            target,
        });
    }

    markers.sort_by_key(|m| m.timestamp_ms);
    markers
}

pub fn gold_series(
    timeline: &TimelineDto,
    player_slot: i32,
    opponent_slot: Option<i32>,
    markers: &[TimelineMarker],
) -> Vec<GoldPoint> {
    let mut series: Vec<GoldPoint> = Vec::new();

    for frame in &timeline.info.frames {
        let Some(player) = frame.participant_frame(player_slot) else {
            continue;
        };
        let minute = minute_of(frame.timestamp);
        let opponent_gold = opponent_slot
            .and_then(|slot| frame.participant_frame(slot))
            .map(|f| f.total_gold);

        // The closing frame can share a minute with the one before it; keep the later one.
        if series.last().map_or(false, |p| p.minute == minute) {
            series.pop();
        }
        series.push(GoldPoint {
            minute,
            player_gold: player.total_gold,
            opponent_gold,
            gold_diff: opponent_gold.map(|o| player.total_gold - o),
            markers: markers
                .iter()
                .filter(|m| minute_of(m.timestamp_ms) == minute)
                .cloned()
                .collect(),
        });
    }

    series
}

fn building_label(building_type: &str, lane_type: &str, tower_type: Option<&str>) -> String {
    let lane = humanize(lane_type);
    let building = match (building_type, tower_type) {
        ("INHIBITOR_BUILDING", _) => "Inhibitor".to_string(),
        (_, Some(tower)) => humanize(tower),
        (other, None) => humanize(other),
    };
    if lane.is_empty() {
        building
    } else {
        format!("{} {}", lane, building)
    }
}

/// `FIRE_DRAGON` -> `Fire Dragon`
fn humanize(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
