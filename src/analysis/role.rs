use crate::api::models::{MatchDto, ParticipantDto, Role};
use std::collections::BTreeMap;

/// Outcome of role resolution over a match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRole {
    Single(Role),
    /// The two most played roles are tied; callers use the unfiltered history.
    Multirole,
}

impl MainRole {
    pub fn role(&self) -> Option<Role> {
        match self {
            MainRole::Single(role) => Some(*role),
            MainRole::Multirole => None,
        }
    }
}

/// Games played per valid role.
pub fn role_counts(matches: &[MatchDto], puuid: &str) -> BTreeMap<Role, usize> {
    let mut counts = BTreeMap::new();
    for role in matches
        .iter()
        .filter_map(|m| m.participant(puuid))
        .filter_map(ParticipantDto::role)
    {
        *counts.entry(role).or_insert(0) += 1;
    }
    counts
}

/// `None` when no match yields a valid role for the player.
pub fn resolve_main_role(matches: &[MatchDto], puuid: &str) -> Option<MainRole> {
    let mut ranked: Vec<(Role, usize)> = role_counts(matches, puuid).into_iter().collect();
    // Stable sort keeps Role order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    match ranked.as_slice() {
        [] => None,
        [(first, c1), (_, c2), ..] if c1 == c2 => {
            tracing::debug!(role = %first, games = c1, "tied top roles, using multirole");
            Some(MainRole::Multirole)
        }
        [(first, _), ..] => Some(MainRole::Single(*first)),
    }
}

/// Matches the consistency engine should scan for the given resolution.
pub fn filter_by_main_role<'a>(
    matches: &'a [MatchDto],
    puuid: &str,
    main_role: Option<MainRole>,
) -> Vec<&'a MatchDto> {
    match main_role {
        Some(MainRole::Single(role)) => matches
            .iter()
            .filter(|m| m.participant(puuid).and_then(ParticipantDto::role) == Some(role))
            .collect(),
        Some(MainRole::Multirole) | None => matches.iter().collect(),
    }
}

/// First participant on the other team sharing `player`'s role.
pub fn find_lane_opponent<'a>(
    match_data: &'a MatchDto,
    player: &ParticipantDto,
) -> Option<&'a ParticipantDto> {
    let role = player.role()?;
    match_data
        .info
        .participants
        .iter()
        .find(|p| p.team_id != player.team_id && p.role() == Some(role))
}
