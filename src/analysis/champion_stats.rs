use crate::analysis::role::find_lane_opponent;
use crate::api::models::{MatchDto, ParticipantDto, BLUE_TEAM, RED_TEAM};
use std::collections::BTreeMap;
use std::fmt;

/// Kill/death/assist ratio. Deathless games with any takedown are `Perfect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kda {
    Ratio(f64),
    Perfect,
}

impl Kda {
    pub fn from_totals(kills: u32, deaths: u32, assists: u32) -> Self {
        let takedowns = (kills + assists) as f64;
        if deaths == 0 {
            if takedowns > 0.0 {
                Kda::Perfect
            } else {
                Kda::Ratio(0.0)
            }
        } else {
            Kda::Ratio(takedowns / deaths as f64)
        }
    }

    pub fn is_perfect(&self) -> bool {
        matches!(self, Kda::Perfect)
    }
}

impl fmt::Display for Kda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kda::Perfect => f.write_str("Perfect"),
            Kda::Ratio(ratio) => write!(f, "{:.1}", ratio),
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Running totals for one side (player or lane opponent) of a set of games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceStats {
    pub games: u32,
    pub wins: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub creep_score: u32,
    pub duration_minutes: f64,
    pub vision_score: u32,
    /// Games that reported a vision score
    pub vision_games: u32,
    pub gold_earned: u64,
    pub gold_games: u32,
    kill_participation_sum: f64,
    kill_participation_games: u32,
}

impl PerformanceStats {
    pub fn record(&mut self, participant: &ParticipantDto, match_data: &MatchDto) {
        self.games += 1;
        if participant.win {
            self.wins += 1;
        }
        self.kills += participant.kills;
        self.deaths += participant.deaths;
        self.assists += participant.assists;
        self.creep_score += participant.creep_score();
        self.duration_minutes += match_data.duration_minutes();

        if let Some(vision) = participant.vision_score {
            self.vision_score += vision;
            self.vision_games += 1;
        }
        if let Some(gold) = participant.gold_earned {
            self.gold_earned += gold as u64;
            self.gold_games += 1;
        }

        let team_kills = match_data.team_kills(participant.team_id);
        if team_kills > 0 {
            self.kill_participation_sum +=
                (participant.kills + participant.assists) as f64 / team_kills as f64;
            self.kill_participation_games += 1;
        }
    }

    pub fn losses(&self) -> u32 {
        self.games - self.wins
    }

    pub fn win_rate(&self) -> f64 {
        ratio(self.wins as f64, self.games as f64) * 100.0
    }

    pub fn kda(&self) -> Kda {
        Kda::from_totals(self.kills, self.deaths, self.assists)
    }

    pub fn cs_per_minute(&self) -> f64 {
        ratio(self.creep_score as f64, self.duration_minutes)
    }

    /// Mean of per-game kill participation, as a percentage.
    pub fn kill_participation(&self) -> f64 {
        ratio(
            self.kill_participation_sum,
            self.kill_participation_games as f64,
        ) * 100.0
    }

    pub fn avg_kills(&self) -> f64 {
        ratio(self.kills as f64, self.games as f64)
    }

    pub fn avg_deaths(&self) -> f64 {
        ratio(self.deaths as f64, self.games as f64)
    }

    pub fn avg_assists(&self) -> f64 {
        ratio(self.assists as f64, self.games as f64)
    }

    pub fn avg_creep_score(&self) -> f64 {
        ratio(self.creep_score as f64, self.games as f64)
    }

    pub fn avg_vision_score(&self) -> f64 {
        ratio(self.vision_score as f64, self.vision_games as f64)
    }

    pub fn avg_gold(&self) -> f64 {
        ratio(self.gold_earned as f64, self.gold_games as f64)
    }

    pub fn avg_duration_minutes(&self) -> f64 {
        ratio(self.duration_minutes, self.games as f64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideRecord {
    pub games: u32,
    pub wins: u32,
}

impl SideRecord {
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins as f64, self.games as f64) * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideStats {
    pub blue: SideRecord,
    pub red: SideRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionStats {
    pub name: String,
    pub player: PerformanceStats,
    /// Lane opponents faced while playing this champion
    pub opponent: PerformanceStats,
}

impl ChampionStats {
    pub fn new(name: String) -> Self {
        ChampionStats {
            name,
            player: PerformanceStats::default(),
            opponent: PerformanceStats::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateStats {
    pub overall: PerformanceStats,
    /// Mirrored totals of every resolved lane opponent
    pub opponent: PerformanceStats,
    pub sides: SideStats,
    /// Sorted by games played, most played first
    pub champions: Vec<ChampionStats>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Only the first N matches of the (newest first) list are used
    pub recent_limit: Option<usize>,
    /// Skip games the player's team remade
    pub exclude_remakes: bool,
}

pub struct ChampionStatsTracker {
    overall: PerformanceStats,
    opponent: PerformanceStats,
    sides: SideStats,
    champions: BTreeMap<String, ChampionStats>,
}

impl ChampionStatsTracker {
    pub fn new() -> Self {
        ChampionStatsTracker {
            overall: PerformanceStats::default(),
            opponent: PerformanceStats::default(),
            sides: SideStats::default(),
            champions: BTreeMap::new(),
        }
    }

    pub fn add_match(&mut self, match_data: &MatchDto, player: &ParticipantDto) {
        self.overall.record(player, match_data);

        let side = match player.team_id {
            BLUE_TEAM => Some(&mut self.sides.blue),
            RED_TEAM => Some(&mut self.sides.red),
            _ => None,
        };
        if let Some(side) = side {
            side.games += 1;
            if player.win {
                side.wins += 1;
            }
        }

        let entry = self
            .champions
            .entry(player.champion_name.clone())
            .or_insert_with(|| ChampionStats::new(player.champion_name.clone()));
        entry.player.record(player, match_data);

        match find_lane_opponent(match_data, player) {
            Some(opponent) => {
                self.opponent.record(opponent, match_data);
                entry.opponent.record(opponent, match_data);
            }
            None => tracing::trace!(match_id = match_data.match_id(), "no lane opponent"),
        }
    }

    pub fn finish(self) -> AggregateStats {
        let mut champions: Vec<ChampionStats> = self.champions.into_values().collect();
        // BTreeMap order already sorts names, so the stable sort breaks ties by name.
        champions.sort_by(|a, b| b.player.games.cmp(&a.player.games));

        AggregateStats {
            overall: self.overall,
            opponent: self.opponent,
            sides: self.sides,
            champions,
        }
    }
}

impl Default for ChampionStatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce a (newest first) match list into overall, opponent and
/// per-champion statistics for one player.
pub fn aggregate_stats(matches: &[MatchDto], puuid: &str, options: AggregateOptions) -> AggregateStats {
    let limit = options.recent_limit.unwrap_or(matches.len());
    aggregate_stats_from(matches.iter().take(limit), puuid, options.exclude_remakes)
}

/// Same as [`aggregate_stats`] for an already selected set of matches.
pub fn aggregate_stats_from<'a, I>(matches: I, puuid: &str, exclude_remakes: bool) -> AggregateStats
where
    I: IntoIterator<Item = &'a MatchDto>,
{
    let mut tracker = ChampionStatsTracker::new();

    for match_data in matches {
        if match_data.info.game_duration <= 0 {
            continue;
        }
        let Some(player) = match_data.participant(puuid) else {
            continue;
        };
        if exclude_remakes && player.game_ended_in_early_surrender {
            continue;
        }
        tracker.add_match(match_data, player);
    }

    tracker.finish()
}
