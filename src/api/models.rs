use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub const BLUE_TEAM: i32 = 100;
pub const RED_TEAM: i32 = 200;

// Match V5 document
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds
    pub game_duration: i64,
    /// Epoch milliseconds
    #[serde(default)]
    pub game_creation: i64,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub queue_id: i32,
    pub participants: Vec<ParticipantDto>,
}

impl MatchDto {
    pub fn match_id(&self) -> &str {
        &self.metadata.match_id
    }

    pub fn participant(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }

    pub fn duration_minutes(&self) -> f64 {
        self.info.game_duration as f64 / 60.0
    }

    /// Sum of champion kills for one team.
    pub fn team_kills(&self, team_id: i32) -> u32 {
        self.info
            .participants
            .iter()
            .filter(|p| p.team_id == team_id)
            .map(|p| p.kills)
            .sum()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    /// Timeline slot, 1..=10
    #[serde(default)]
    pub participant_id: i32,
    #[serde(default)]
    pub champion_id: i32,
    pub champion_name: String,
    pub team_id: i32,
    pub win: bool,
    #[serde(default)]
    pub team_position: String, // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub gold_earned: Option<u32>,
    #[serde(default)]
    pub total_minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub vision_score: Option<u32>,
    #[serde(default)]
    pub game_ended_in_early_surrender: bool,
    #[serde(default)]
    pub challenges: Challenges,
}

impl ParticipantDto {
    pub fn role(&self) -> Option<Role> {
        Role::from_position(&self.team_position)
    }

    pub fn creep_score(&self) -> u32 {
        self.total_minions_killed + self.neutral_minions_killed
    }
}

/// Lane assignment as reported by `teamPosition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Middle,
        Role::Bottom,
        Role::Utility,
    ];

    /// `None` for "NONE", empty and anything unrecognised.
    pub fn from_position(position: &str) -> Option<Role> {
        match position.trim().to_uppercase().as_str() {
            "TOP" => Some(Role::Top),
            "JUNGLE" => Some(Role::Jungle),
            "MIDDLE" | "MID" => Some(Role::Middle),
            "BOTTOM" | "BOT" | "ADC" => Some(Role::Bottom),
            "UTILITY" | "SUPPORT" => Some(Role::Utility),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::Bottom => "BOTTOM",
            Role::Utility => "UTILITY",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse challenge metrics. A missing key means "not recorded", which is
/// different from a recorded zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct Challenges(BTreeMap<String, f64>);

impl Challenges {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// The feed mixes numbers with arrays (e.g. legendaryItemUsed); only numbers are kept.
impl From<BTreeMap<String, Value>> for Challenges {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        Challenges(
            raw.into_iter()
                .filter_map(|(key, value)| value.as_f64().map(|v| (key, v)))
                .collect(),
        )
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Challenges {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Challenges(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
