use super::game_state::{Game, GameMetadata};
use crate::model::frame::Frame;
use crate::model::pins::PinSet;
use crate::model::throw::Throw;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThrowData {
    #[serde(default)]
    pub knocked_pins: Vec<u8>,
    #[serde(default)]
    pub is_foul: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
    pub number: u8,
    #[serde(default)]
    pub throws: Vec<ThrowData>,
    #[serde(default)]
    pub is_pocket_hit: bool,
}

/// Plain storage form of a [`Game`]. Pin sets become ascending pin lists and
/// the date is written as an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub date: DateTime<Utc>,
    pub frames: Vec<FrameData>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub total_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<String>,
}

impl From<&Throw> for ThrowData {
    fn from(throw: &Throw) -> Self {
        ThrowData {
            knocked_pins: throw.knocked_pins().to_vec(),
            is_foul: throw.is_foul(),
        }
    }
}

impl From<&ThrowData> for Throw {
    fn from(data: &ThrowData) -> Self {
        Throw::from_parts(
            PinSet::from_pins(data.knocked_pins.iter().copied()),
            data.is_foul,
        )
    }
}

impl From<&Frame> for FrameData {
    fn from(frame: &Frame) -> Self {
        FrameData {
            number: frame.number(),
            throws: frame.throws().iter().map(ThrowData::from).collect(),
            is_pocket_hit: frame.is_pocket_hit(),
        }
    }
}

impl From<&FrameData> for Frame {
    fn from(data: &FrameData) -> Self {
        Frame::from_parts(
            data.number,
            data.throws.iter().map(Throw::from).collect(),
            data.is_pocket_hit,
        )
    }
}

pub fn game_to_data(game: &Game) -> GameData {
    let metadata = game.metadata().clone();
    GameData {
        date: game.date(),
        frames: game.frames().iter().map(FrameData::from).collect(),
        is_complete: game.is_complete(),
        total_score: game.total_score(),
        lane: metadata.lane,
        oil_pattern: metadata.oil_pattern,
        lane_condition: metadata.lane_condition,
        game_type: metadata.game_type,
    }
}

/// Structural mapping back to a [`Game`]. The stored total and completion
/// flag are ignored and recomputed from the frames, and stored frame numbers
/// are replaced by list position.
pub fn data_to_game(data: GameData) -> Game {
    let frames = data.frames.iter().map(Frame::from).collect();
    let metadata = GameMetadata {
        lane: data.lane,
        oil_pattern: data.oil_pattern,
        lane_condition: data.lane_condition,
        game_type: data.game_type,
    };
    Game::from_parts(data.date, frames, metadata)
}

impl GameData {
    pub fn capture(game: &Game) -> Self {
        game_to_data(game)
    }

    pub fn restore(self) -> Game {
        data_to_game(self)
    }

    pub fn to_json(game: &Game) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(game))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_game() -> Game {
        let date = Utc
            .with_ymd_and_hms(2024, 11, 2, 18, 45, 12)
            .single()
            .expect("valid date");
        let metadata = GameMetadata {
            lane: Some("14".to_string()),
            oil_pattern: Some("House Shot".to_string()),
            lane_condition: None,
            game_type: Some("league".to_string()),
        };
        let mut game = Game::with_metadata(date, metadata);
        game.record_next(Throw::new(PinSet::full())).unwrap();
        game.record_next(Throw::new(PinSet::from_pins([1, 2, 3, 5, 6, 8, 9])))
            .unwrap();
        game.record_next(Throw::foul()).unwrap();
        game.set_pocket_hit(0, true).unwrap();
        game
    }

    #[test]
    fn json_uses_camel_case_pin_lists() {
        let json = GameData::to_json(&sample_game()).unwrap();
        assert!(json.contains("\"knockedPins\": ["));
        assert!(json.contains("\"isFoul\": true"));
        assert!(json.contains("\"isPocketHit\": true"));
        assert!(json.contains("\"totalScore\": 24"));
        assert!(json.contains("\"date\": \"2024-11-02T18:45:12Z\""));
        assert!(json.contains("\"oilPattern\": \"House Shot\""));
        assert!(!json.contains("laneCondition"));
    }

    #[test]
    fn roundtrip_restores_pins_fouls_and_date() {
        let game = sample_game();
        let json = GameData::to_json(&game).unwrap();
        let restored = GameData::from_json(&json).unwrap().restore();
        assert_eq!(restored, game);
        assert_eq!(restored.date(), game.date());
        assert_eq!(
            restored.frames()[1].throws()[0].knocked_pins(),
            PinSet::from_pins([9, 8, 6, 5, 3, 2, 1])
        );
        assert!(restored.frames()[1].throws()[1].is_foul());
    }

    #[test]
    fn stored_total_is_recomputed() {
        let mut data = game_to_data(&sample_game());
        data.total_score = 999;
        data.is_complete = true;
        let game = data_to_game(data);
        assert_eq!(game.total_score(), 24);
        assert!(!game.is_complete());
    }

    #[test]
    fn legacy_payload_with_millisecond_date() {
        let legacy = r#"{
            "date": "2023-06-01T20:15:30.250Z",
            "frames": [
                { "number": 1, "throws": [ { "knockedPins": [1,2,3,4,5,6,7,8,9,10], "isFoul": false } ], "isPocketHit": true },
                { "number": 2, "throws": [ { "knockedPins": [1,2,3], "isFoul": false }, { "knockedPins": [4,5,6], "isFoul": false } ] }
            ],
            "isComplete": false,
            "totalScore": 25
        }"#;

        let data = GameData::from_json(legacy).unwrap();
        assert_eq!(data.date.timestamp_subsec_millis(), 250);
        let game = data.clone().restore();
        assert_eq!(game.cumulative_scores(), vec![16, 22]);
        assert_eq!(game_to_data(&game).date, data.date);
    }

    #[test]
    fn frame_numbers_follow_list_position() {
        let mut frames: Vec<FrameData> = (1..=9)
            .map(|number| FrameData {
                number,
                throws: vec![ThrowData::default(), ThrowData::default()],
                is_pocket_hit: false,
            })
            .collect();
        let strike = ThrowData {
            knocked_pins: (1..=10).collect(),
            is_foul: false,
        };
        frames.push(FrameData {
            number: 3,
            throws: vec![strike.clone(), strike.clone(), strike],
            is_pocket_hit: false,
        });
        let data = GameData {
            date: Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).single().unwrap(),
            frames,
            is_complete: false,
            total_score: 0,
            lane: None,
            oil_pattern: None,
            lane_condition: None,
            game_type: None,
        };

        let game = data_to_game(data);
        assert_eq!(game.frames()[9].number(), 10);
        assert_eq!(game.total_score(), 30);
        assert!(game.is_complete());
        assert_eq!(game_to_data(&game).frames[9].number, 10);
    }

    #[test]
    fn foul_with_recorded_pins_survives_roundtrip_unchanged() {
        let data = ThrowData {
            knocked_pins: vec![1, 2],
            is_foul: true,
        };
        let throw = Throw::from(&data);
        assert_eq!(ThrowData::from(&throw), data);
        assert_eq!(throw.pin_count(), 0);
    }
}
