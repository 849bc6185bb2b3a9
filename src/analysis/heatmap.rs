use crate::analysis::timeline::minute_of;
use crate::api::timeline::{EventDto, TimelineDto};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeatmapKind {
    Position,
    Kill,
    Death,
    Assist,
    WardPlaced,
}

impl HeatmapKind {
    pub const ALL: [HeatmapKind; 5] = [
        HeatmapKind::Position,
        HeatmapKind::Kill,
        HeatmapKind::Death,
        HeatmapKind::Assist,
        HeatmapKind::WardPlaced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HeatmapKind::Position => "Position",
            HeatmapKind::Kill => "Kill",
            HeatmapKind::Death => "Death",
            HeatmapKind::Assist => "Assist",
            HeatmapKind::WardPlaced => "Ward",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapSample {
    pub match_id: String,
    pub minute: i64,
    pub x: i32,
    pub y: i32,
    pub kind: HeatmapKind,
}

/// Positional samples for one player across many timelines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heatmap {
    pub samples: Vec<HeatmapSample>,
}

impl Heatmap {
    pub fn collect<'a, I>(timelines: I, puuid: &str) -> Self
    where
        I: IntoIterator<Item = &'a TimelineDto>,
    {
        let mut samples = Vec::new();
        for timeline in timelines {
            let Some(slot) = timeline.slot_of(puuid) else {
                tracing::debug!(match_id = timeline.match_id(), "player missing from timeline");
                continue;
            };
            extract_samples(timeline, slot, &mut samples);
        }
        Heatmap { samples }
    }

    /// Samples of one kind, optionally only up to and including `max_minute`.
    pub fn filter(
        &self,
        kind: HeatmapKind,
        max_minute: Option<i64>,
    ) -> impl Iterator<Item = &HeatmapSample> {
        self.samples.iter().filter(move |s| {
            s.kind == kind && max_minute.map_or(true, |max| s.minute <= max)
        })
    }

    pub fn counts(&self, max_minute: Option<i64>) -> BTreeMap<HeatmapKind, usize> {
        HeatmapKind::ALL
            .iter()
            .map(|&kind| (kind, self.filter(kind, max_minute).count()))
            .collect()
    }
}

fn extract_samples(timeline: &TimelineDto, slot: i32, samples: &mut Vec<HeatmapSample>) {
    let match_id = timeline.match_id();
    let mut push = |timestamp: i64, x: i32, y: i32, kind: HeatmapKind| {
        samples.push(HeatmapSample {
            match_id: match_id.to_string(),
            minute: minute_of(timestamp),
            x,
            y,
            kind,
        });
    };

    for frame in &timeline.info.frames {
        let frame_position = frame.participant_frame(slot).and_then(|f| f.position);
        if let Some(pos) = frame_position {
            push(frame.timestamp, pos.x, pos.y, HeatmapKind::Position);
        }

        for event in &frame.events {
            match event {
                EventDto::ChampionKill {
                    timestamp,
                    killer_id,
                    victim_id,
                    assisting_participant_ids,
                    position: Some(pos),
                } => {
                    let kind = if *killer_id == slot {
                        HeatmapKind::Kill
                    } else if *victim_id == slot {
                        HeatmapKind::Death
                    } else if assisting_participant_ids.contains(&slot) {
                        HeatmapKind::Assist
                    } else {
                        continue;
                    };
                    push(*timestamp, pos.x, pos.y, kind);
                }
                // Ward events carry no coordinates; use where the player stood that frame.
                EventDto::WardPlaced {
                    timestamp,
                    creator_id,
                    ..
                } if *creator_id == slot => {
                    if let Some(pos) = frame_position {
                        push(*timestamp, pos.x, pos.y, HeatmapKind::WardPlaced);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::timeline::{
        FrameDto, ParticipantFrame, Position, TimelineInfo, TimelineMetadata, TimelineParticipant,
    };

    fn timeline(frames: Vec<FrameDto>) -> TimelineDto {
        TimelineDto {
            metadata: TimelineMetadata {
                match_id: "NA1_1".to_string(),
                participants: vec![],
            },
            info: TimelineInfo {
                frame_interval: 60_000,
                frames,
                participants: vec![
                    TimelineParticipant { participant_id: 1, puuid: "me".to_string() },
                    TimelineParticipant { participant_id: 6, puuid: "enemy".to_string() },
                ],
            },
        }
    }

    fn frame(timestamp: i64, x: i32, events: Vec<EventDto>) -> FrameDto {
        let mut participant_frames = BTreeMap::new();
        participant_frames.insert(
            "1".to_string(),
            ParticipantFrame {
                total_gold: 500,
                level: 1,
                position: Some(Position { x, y: 100 }),
            },
        );
        FrameDto {
            timestamp,
            participant_frames,
            events,
        }
    }

    fn kill(timestamp: i64, killer_id: i32, victim_id: i32) -> EventDto {
        EventDto::ChampionKill {
            timestamp,
            killer_id,
            victim_id,
            assisting_participant_ids: vec![],
            position: Some(Position { x: 7, y: 7 }),
        }
    }

    #[test]
    fn deaths_can_be_filtered_by_minute() {
        let tl = timeline(vec![
            frame(0, 10, vec![]),
            frame(60_000, 20, vec![kill(300_000, 6, 1)]),
            frame(780_000, 30, vec![kill(790_000, 6, 1), kill(795_000, 1, 6)]),
        ]);
        let heatmap = Heatmap::collect([&tl], "me");

        assert_eq!(heatmap.filter(HeatmapKind::Death, None).count(), 2);
        assert_eq!(heatmap.filter(HeatmapKind::Death, Some(12)).count(), 1);
        assert_eq!(heatmap.filter(HeatmapKind::Kill, None).count(), 1);
        assert_eq!(heatmap.counts(None)[&HeatmapKind::Position], 3);
    }

    #[test]
    fn wards_use_frame_position_and_unknown_players_are_skipped() {
        let ward = EventDto::WardPlaced {
            timestamp: 125_000,
            creator_id: 1,
            ward_type: "YELLOW_TRINKET".to_string(),
        };
        let tl = timeline(vec![frame(120_000, 42, vec![ward])]);

        let heatmap = Heatmap::collect([&tl], "me");
        let wards: Vec<_> = heatmap.filter(HeatmapKind::WardPlaced, None).collect();
        assert_eq!(wards.len(), 1);
        assert_eq!((wards[0].x, wards[0].minute), (42, 2));

        assert!(Heatmap::collect([&tl], "stranger").samples.is_empty());
    }
}
