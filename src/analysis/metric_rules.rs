use crate::analysis::archetype::ChampionTag;
use crate::api::models::Role;

/// Which side of a comparison is the better one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
    /// Depends on the champion's archetype (and role as a fallback)
    ChampionDependent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchetypeGate {
    /// Only scored for champions carrying the tag
    OnlyFor(ChampionTag),
    /// Never scored for champions carrying the tag
    SkipFor(ChampionTag),
}

/// Per-key tables driving the consistency engine. Keys not mentioned anywhere
/// are compared as higher-is-better for every role and champion.
#[derive(Debug, Clone)]
pub struct MetricRules {
    pub excluded: &'static [&'static str],
    pub role_gates: &'static [(&'static str, &'static [Role])],
    pub archetype_gates: &'static [(&'static str, ArchetypeGate)],
    pub lower_is_better_prefixes: &'static [&'static str],
    pub champion_dependent: &'static [&'static str],
}

const EXCLUDED: &[&str] = &[
    "legendaryItemUsed",
    "playedChampSelectPosition",
    "soloKills",
    "abilityUses",
    "bountyGold",
    "gameLength",
    "mejaisFullStackInTime",
    "fistBumpParticipation",
    "dancedWithRiftHerald",
    "doubleAces",
    "elderDragonKillsWithOpposingSoul",
    "hadOpenNexus",
    "poroExplosions",
    "snowballsHit",
    "takedownsInAlcove",
    "quickCleanse",
    "unseenRecalls",
    "twentyMinionsIn3SecondsCount",
    "blastConeOppositeOpponentCount",
    "InfernalScalePickup",
    "HealFromMapSources",
    "thirdInhibitorDestroyedTime",
    "shortestTimeToAceFromFirstTakedown",
    "teleportTakedowns",
];

const ROLE_GATES: &[(&str, &[Role])] = &[
    ("alliedJungleMonsterKills", &[Role::Jungle]),
    ("buffsStolen", &[Role::Jungle]),
    ("enemyJungleMonsterKills", &[Role::Jungle]),
    ("epicMonsterKillsNearEnemyJungler", &[Role::Jungle]),
    ("epicMonsterKillsWithin30SecondsOfSpawn", &[Role::Jungle]),
    ("initialCrabCount", &[Role::Jungle]),
    ("jungleCsBefore10Minutes", &[Role::Jungle]),
    ("junglerKillsEarlyJungle", &[Role::Jungle]),
    ("junglerTakedownsNearDamagedEpicMonster", &[Role::Jungle]),
    ("killsOnLanersEarlyJungleAsJungler", &[Role::Jungle]),
    ("moreEnemyJungleThanOpponent", &[Role::Jungle]),
    ("scuttleCrabKills", &[Role::Jungle]),
    ("earliestDragonTakedown", &[Role::Jungle]),
    ("earliestBaron", &[Role::Jungle]),
    ("completeSupportQuestInTime", &[Role::Utility]),
    ("fasterSupportQuestCompletion", &[Role::Utility]),
    ("stealthWardsPlaced", &[Role::Utility, Role::Jungle]),
    ("controlWardTimeCoverageInRiverOrEnemyHalf", &[Role::Utility, Role::Jungle]),
    ("laneMinionsFirst10Minutes", &[Role::Top, Role::Middle, Role::Bottom]),
    ("maxCsAdvantageOnLaneOpponent", &[Role::Top, Role::Middle, Role::Bottom]),
    ("maxLevelLeadLaneOpponent", &[Role::Top, Role::Middle, Role::Bottom]),
    ("turretPlatesTaken", &[Role::Top, Role::Middle, Role::Bottom]),
    ("killsUnderOwnTurret", &[Role::Top, Role::Middle, Role::Bottom]),
];

const ARCHETYPE_GATES: &[(&str, ArchetypeGate)] = &[
    ("effectiveHealAndShielding", ArchetypeGate::OnlyFor(ChampionTag::Support)),
    ("saveAllyFromDeath", ArchetypeGate::OnlyFor(ChampionTag::Support)),
    ("enemyChampionImmobilizations", ArchetypeGate::SkipFor(ChampionTag::Assassin)),
    ("immobilizeAndKillWithAlly", ArchetypeGate::SkipFor(ChampionTag::Assassin)),
    ("knockEnemyIntoTeamAndKill", ArchetypeGate::SkipFor(ChampionTag::Assassin)),
];

const LOWER_IS_BETTER_PREFIXES: &[&str] = &["earliest", "fastest", "shortest"];

const CHAMPION_DEPENDENT: &[&str] = &["damageTakenOnTeamPercentage"];

impl Default for MetricRules {
    fn default() -> Self {
        MetricRules {
            excluded: EXCLUDED,
            role_gates: ROLE_GATES,
            archetype_gates: ARCHETYPE_GATES,
            lower_is_better_prefixes: LOWER_IS_BETTER_PREFIXES,
            champion_dependent: CHAMPION_DEPENDENT,
        }
    }
}

impl MetricRules {
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded.contains(&key)
    }

    /// Ungated keys are allowed for every role.
    pub fn role_allows(&self, key: &str, role: Option<Role>) -> bool {
        match self.role_gates.iter().find(|(gated, _)| *gated == key) {
            Some((_, roles)) => role.map_or(false, |r| roles.contains(&r)),
            None => true,
        }
    }

    pub fn archetype_allows(&self, key: &str, tags: &[ChampionTag]) -> bool {
        self.archetype_gates
            .iter()
            .filter(|(gated, _)| *gated == key)
            .all(|(_, gate)| match gate {
                ArchetypeGate::OnlyFor(tag) => tags.contains(tag),
                ArchetypeGate::SkipFor(tag) => !tags.contains(tag),
            })
    }

    pub fn direction(&self, key: &str) -> Direction {
        if self.champion_dependent.contains(&key) {
            Direction::ChampionDependent
        } else if self
            .lower_is_better_prefixes
            .iter()
            .any(|prefix| key.starts_with(prefix))
        {
            Direction::LowerIsBetter
        } else {
            Direction::HigherIsBetter
        }
    }

    /// Direction for a key after champion-dependent keys are settled.
    pub fn resolved_direction(&self, key: &str, tags: &[ChampionTag], role: Option<Role>) -> Direction {
        match self.direction(key) {
            Direction::ChampionDependent => frontline_direction(tags, role),
            direction => direction,
        }
    }
}

/// Tanks want to soak damage; backline champions want to avoid it.
fn frontline_direction(tags: &[ChampionTag], role: Option<Role>) -> Direction {
    let tank = tags.contains(&ChampionTag::Tank);
    let fighter = tags.contains(&ChampionTag::Fighter);
    let backline = tags.iter().any(ChampionTag::is_backline);

    if tank || (fighter && !backline) {
        Direction::HigherIsBetter
    } else if backline && !fighter {
        Direction::LowerIsBetter
    } else {
        match role {
            Some(Role::Middle | Role::Bottom | Role::Utility) => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }
}
