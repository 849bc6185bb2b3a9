use crate::analysis::archetype::{ArchetypeLookup, StaticArchetypes};
use crate::analysis::metric_rules::{Direction, MetricRules};
use crate::analysis::role::{filter_by_main_role, find_lane_opponent, resolve_main_role, MainRole};
use crate::api::models::{MatchDto, ParticipantDto};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

const MIN_OBSERVATIONS: u32 = 3;
const MAX_LISTED: usize = 10;

/// Head-to-head tally of one challenge metric against lane opponents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyStat {
    pub key: String,
    pub wins: u32,
    pub losses: u32,
    /// Exactly equal values; part of the sample but neither win nor loss
    pub ties: u32,
}

impl ConsistencyStat {
    fn new(key: &str) -> Self {
        ConsistencyStat {
            key: key.to_string(),
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    pub fn observations(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn decisive(&self) -> u32 {
        self.wins + self.losses
    }

    /// Percentage of observed games where the player came out ahead.
    pub fn consistency(&self) -> f64 {
        percent(self.wins, self.observations())
    }

    /// Percentage of observed games where the opponent came out ahead.
    pub fn loss_consistency(&self) -> f64 {
        percent(self.losses, self.observations())
    }

    pub fn is_strength(&self) -> bool {
        self.wins > self.losses
    }

    pub fn is_weakness(&self) -> bool {
        self.losses > self.wins
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsistencyReport {
    pub main_role: Option<MainRole>,
    /// Matches where a lane opponent was found and compared
    pub matches_compared: usize,
    pub strengths: Vec<ConsistencyStat>,
    pub weaknesses: Vec<ConsistencyStat>,
}

pub struct ConsistencyEngine<L: ArchetypeLookup> {
    rules: MetricRules,
    archetypes: L,
    min_observations: u32,
    max_listed: usize,
}

impl ConsistencyEngine<StaticArchetypes> {
    pub fn new() -> Self {
        Self::with_archetypes(StaticArchetypes)
    }
}

impl Default for ConsistencyEngine<StaticArchetypes> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ArchetypeLookup> ConsistencyEngine<L> {
    pub fn with_archetypes(archetypes: L) -> Self {
        ConsistencyEngine {
            rules: MetricRules::default(),
            archetypes,
            min_observations: MIN_OBSERVATIONS,
            max_listed: MAX_LISTED,
        }
    }

    pub fn with_rules(mut self, rules: MetricRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn analyze(&self, matches: &[MatchDto], puuid: &str) -> ConsistencyReport {
        let main_role = resolve_main_role(matches, puuid);
        let selected = filter_by_main_role(matches, puuid, main_role);

        let mut tallies: BTreeMap<String, ConsistencyStat> = BTreeMap::new();
        let mut matches_compared = 0;

        for match_data in selected {
            let Some(player) = match_data.participant(puuid) else {
                continue;
            };
            let Some(opponent) = find_lane_opponent(match_data, player) else {
                tracing::debug!(match_id = match_data.match_id(), "skipping match without lane opponent");
                continue;
            };
            matches_compared += 1;
            self.compare_match(player, opponent, &mut tallies);
        }

        let (strengths, weaknesses) = self.rank(tallies.into_values());

        ConsistencyReport {
            main_role,
            matches_compared,
            strengths,
            weaknesses,
        }
    }

    fn compare_match(
        &self,
        player: &ParticipantDto,
        opponent: &ParticipantDto,
        tallies: &mut BTreeMap<String, ConsistencyStat>,
    ) {
        let role = player.role();
        let tags = self.archetypes.tags(&player.champion_name);

        let keys: BTreeSet<&str> = player
            .challenges
            .keys()
            .chain(opponent.challenges.keys())
            .collect();

        for key in keys {
            if self.rules.is_excluded(key)
                || !self.rules.role_allows(key, role)
                || !self.rules.archetype_allows(key, tags)
            {
                continue;
            }

            let direction = self.rules.resolved_direction(key, tags, role);
            let outcome = compare_values(
                direction,
                player.challenges.get(key),
                opponent.challenges.get(key),
            );

            let stat = tallies
                .entry(key.to_string())
                .or_insert_with(|| ConsistencyStat::new(key));
            match outcome {
                Ordering::Greater => stat.wins += 1,
                Ordering::Less => stat.losses += 1,
                Ordering::Equal => stat.ties += 1,
            }
        }
    }

    fn rank(
        &self,
        tallies: impl Iterator<Item = ConsistencyStat>,
    ) -> (Vec<ConsistencyStat>, Vec<ConsistencyStat>) {
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        for stat in tallies.filter(|s| s.observations() >= self.min_observations) {
            if stat.is_strength() {
                strengths.push(stat);
            } else if stat.is_weakness() {
                weaknesses.push(stat);
            }
        }

        strengths.sort_by(|a, b| {
            b.consistency()
                .total_cmp(&a.consistency())
                .then(b.wins.cmp(&a.wins))
                .then_with(|| a.key.cmp(&b.key))
        });
        weaknesses.sort_by(|a, b| {
            b.loss_consistency()
                .total_cmp(&a.loss_consistency())
                .then(b.losses.cmp(&a.losses))
                .then_with(|| a.key.cmp(&b.key))
        });
        strengths.truncate(self.max_listed);
        weaknesses.truncate(self.max_listed);

        (strengths, weaknesses)
    }
}

/// `Greater` when the player's value is the better one.
fn compare_values(direction: Direction, player: Option<f64>, opponent: Option<f64>) -> Ordering {
    match direction {
        Direction::LowerIsBetter => {
            // Not reaching a timed milestone at all is the worst outcome.
            let normalize = |v: Option<f64>| match v {
                Some(v) if v > 0.0 => v,
                _ => f64::INFINITY,
            };
            normalize(opponent)
                .partial_cmp(&normalize(player))
                .unwrap_or(Ordering::Equal)
        }
        _ => player
            .unwrap_or(0.0)
            .partial_cmp(&opponent.unwrap_or(0.0))
            .unwrap_or(Ordering::Equal),
    }
}

/// Strengths and weaknesses with the bundled archetype table and rules.
pub fn analyze_consistency(matches: &[MatchDto], puuid: &str) -> ConsistencyReport {
    ConsistencyEngine::new().analyze(matches, puuid)
}
