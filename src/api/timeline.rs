use serde::Deserialize;
use std::collections::BTreeMap;

// Match V5 timeline document
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimelineDto {
    pub metadata: TimelineMetadata,
    pub info: TimelineInfo,
}

impl TimelineDto {
    pub fn match_id(&self) -> &str {
        &self.metadata.match_id
    }

    /// Timeline slot for a puuid. Prefers the explicit participant list and
    /// falls back to position in the metadata list.
    pub fn slot_of(&self, puuid: &str) -> Option<i32> {
        self.info
            .participants
            .iter()
            .find(|p| p.puuid == puuid)
            .map(|p| p.participant_id)
            .or_else(|| {
                self.metadata
                    .participants
                    .iter()
                    .position(|p| p == puuid)
                    .map(|idx| idx as i32 + 1)
            })
    }

    pub fn puuid_of(&self, slot: i32) -> Option<&str> {
        self.info
            .participants
            .iter()
            .find(|p| p.participant_id == slot)
            .map(|p| p.puuid.as_str())
            .or_else(|| {
                usize::try_from(slot - 1)
                    .ok()
                    .and_then(|idx| self.metadata.participants.get(idx))
                    .map(String::as_str)
            })
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMetadata {
    pub match_id: String,
    /// Puuids in slot order
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    #[serde(default)]
    pub frame_interval: i64,
    pub frames: Vec<FrameDto>,
    #[serde(default)]
    pub participants: Vec<TimelineParticipant>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimelineParticipant {
    pub participant_id: i32,
    pub puuid: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FrameDto {
    /// Milliseconds since game start
    pub timestamp: i64,
    /// Keyed by slot id as a string ("1".."10")
    #[serde(default)]
    pub participant_frames: BTreeMap<String, ParticipantFrame>,
    #[serde(default)]
    pub events: Vec<EventDto>,
}

impl FrameDto {
    pub fn participant_frame(&self, slot: i32) -> Option<&ParticipantFrame> {
        self.participant_frames.get(&slot.to_string())
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrame {
    #[serde(default)]
    pub total_gold: i32,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventDto {
    #[serde(rename_all = "camelCase")]
    ChampionKill {
        timestamp: i64,
        killer_id: i32,
        victim_id: i32,
        #[serde(default)]
        assisting_participant_ids: Vec<i32>,
        #[serde(default)]
        position: Option<Position>,
    },
    #[serde(rename_all = "camelCase")]
    BuildingKill {
        timestamp: i64,
        killer_id: i32,
        #[serde(default)]
        assisting_participant_ids: Vec<i32>,
        /// Team that owned the building
        team_id: i32,
        #[serde(default)]
        building_type: String,
        #[serde(default)]
        lane_type: String,
        #[serde(default)]
        tower_type: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    EliteMonsterKill {
        timestamp: i64,
        killer_id: i32,
        #[serde(default)]
        assisting_participant_ids: Vec<i32>,
        #[serde(default)]
        monster_type: String,
        #[serde(default)]
        monster_sub_type: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    ItemPurchased {
        timestamp: i64,
        participant_id: i32,
        item_id: i32,
    },
    #[serde(rename_all = "camelCase")]
    SkillLevelUp {
        timestamp: i64,
        participant_id: i32,
        skill_slot: i32,
        #[serde(default)]
        level_up_type: String,
    },
    #[serde(rename_all = "camelCase")]
    WardPlaced {
        timestamp: i64,
        creator_id: i32,
        #[serde(default)]
        ward_type: String,
    },
    #[serde(other)]
    Other,
}

impl EventDto {
    pub fn timestamp(&self) -> Option<i64> {
        match self {
            EventDto::ChampionKill { timestamp, .. }
            | EventDto::BuildingKill { timestamp, .. }
            | EventDto::EliteMonsterKill { timestamp, .. }
            | EventDto::ItemPurchased { timestamp, .. }
            | EventDto::SkillLevelUp { timestamp, .. }
            | EventDto::WardPlaced { timestamp, .. } => Some(*timestamp),
            EventDto::Other => None,
        }
    }
}
