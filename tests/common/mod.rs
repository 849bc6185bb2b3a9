#![allow(dead_code)]

use match_insights::api::models::{Challenges, MatchDto, MatchInfo, MatchMetadata, ParticipantDto};

pub const PLAYER: &str = "player-puuid";
pub const OPPONENT: &str = "opponent-puuid";

pub fn participant(puuid: &str, champion: &str, team_id: i32, position: &str) -> ParticipantDto {
    ParticipantDto {
        puuid: puuid.to_string(),
        champion_name: champion.to_string(),
        team_id,
        team_position: position.to_string(),
        ..Default::default()
    }
}

pub fn with_challenges(mut p: ParticipantDto, values: &[(&str, f64)]) -> ParticipantDto {
    p.challenges = values.iter().map(|(k, v)| (*k, *v)).collect::<Challenges>();
    p
}

pub fn game(id: &str, participants: Vec<ParticipantDto>) -> MatchDto {
    MatchDto {
        metadata: MatchMetadata {
            match_id: id.to_string(),
            participants: participants.iter().map(|p| p.puuid.clone()).collect(),
        },
        info: MatchInfo {
            game_duration: 1800,
            game_mode: "CLASSIC".to_string(),
            queue_id: 420,
            participants,
            ..Default::default()
        },
    }
}

/// A 1v1 lane matchup where both sides record the given challenge values.
pub fn head_to_head(
    id: &str,
    position: &str,
    champions: (&str, &str),
    player_values: &[(&str, f64)],
    opponent_values: &[(&str, f64)],
) -> MatchDto {
    game(
        id,
        vec![
            with_challenges(participant(PLAYER, champions.0, 100, position), player_values),
            with_challenges(participant(OPPONENT, champions.1, 200, position), opponent_values),
        ],
    )
}
