//! Save and restore a complete round.
//!
//! JSON is the save-file format; MessagePack is a compact snapshot of the
//! same structure. Decoding always re-validates and recomputes, so a state
//! that parses but disagrees with its own strokes is rejected.

use std::path::Path;

use thiserror::Error;

use matchpoints_core::InvalidInput;

use crate::round::RoundState;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("save data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("snapshot is corrupt: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    #[error("saved round is invalid: {0}")]
    Invalid(#[from] InvalidInput),

    #[error("saved totals do not match the saved strokes")]
    Inconsistent,

    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SerializationError>;

fn checked(state: RoundState) -> Result<RoundState> {
    state.validate()?;
    if state.recompute()? != *state.scores() {
        return Err(SerializationError::Inconsistent);
    }
    Ok(state)
}

pub fn to_json(state: &RoundState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn from_json(data: &str) -> Result<RoundState> {
    checked(serde_json::from_str(data)?)
}

pub fn to_msgpack(state: &RoundState) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(state)?)
}

pub fn from_msgpack(data: &[u8]) -> Result<RoundState> {
    checked(rmp_serde::from_slice(data)?)
}

/// Restore a saved round, or fall back to `fresh` if the save is unusable.
///
/// `T` is usually `RoundState`; a shell with no round to fall back to can
/// ask for `Option<RoundState>` and pass `|| None`.
pub fn load_or_fresh<T: From<RoundState>>(data: &str, fresh: impl FnOnce() -> T) -> T {
    match from_json(data) {
        Ok(state) => state.into(),
        Err(e) => {
            tracing::warn!("discarding saved round: {e}");
            fresh()
        },
    }
}

pub fn save_to_path(state: &RoundState, path: &Path) -> Result<()> {
    std::fs::write(path, to_json(state)?)?;
    tracing::debug!(path = %path.display(), "round saved");
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<RoundState> {
    let contents = std::fs::read_to_string(path)?;
    from_json(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::{RoundOptions, StrokeEdit};
    use matchpoints_core::default_course;
    use matchpoints_core::test_helpers::{make_players, rules};

    fn played_round() -> RoundState {
        let state = RoundState::new(
            make_players(3),
            rules(2, 1, 0, 1, 2, true),
            default_course(),
            RoundOptions::default(),
        )
        .unwrap();
        [(0, 1, 4), (1, 1, 4), (2, 1, 6), (0, 2, 1), (1, 2, 3), (2, 2, 3)]
            .into_iter()
            .fold(state, |s, (player, hole, strokes)| {
                s.apply_edit(StrokeEdit {
                    player,
                    hole,
                    strokes,
                })
                .unwrap()
            })
            .goto_hole(2)
            .unwrap()
    }

    #[test]
    fn json_roundtrip_is_lossless() {
        let state = played_round();
        let json = to_json(&state).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.current_hole(), 2);
    }

    #[test]
    fn msgpack_roundtrip_is_lossless() {
        let state = played_round();
        let bytes = to_msgpack(&state).unwrap();
        assert_eq!(from_msgpack(&bytes).unwrap(), state);
    }

    #[test]
    fn garbage_is_a_json_error() {
        assert!(matches!(
            from_json("{not json"),
            Err(SerializationError::Json(_))
        ));
        assert!(matches!(
            from_json(r#"{"players": []}"#),
            Err(SerializationError::Json(_))
        ));
    }

    #[test]
    fn tampered_totals_are_inconsistent() {
        let state = played_round();
        let mut value: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
        value["scores"]["totals"][0] = serde_json::json!({ "num": 99, "den": 1 });
        let err = from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SerializationError::Inconsistent));
    }

    #[test]
    fn tampered_totals_pass_structural_validation_only() {
        let state = played_round();
        let mut value: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
        value["scores"]["totals"][1] = serde_json::json!({ "num": -7, "den": 2 });
        let tampered: RoundState = serde_json::from_value(value).unwrap();
        assert!(tampered.validate().is_ok());
        assert_ne!(tampered.recompute().unwrap(), *tampered.scores());
        assert!(matches!(
            from_msgpack(&to_msgpack(&tampered).unwrap()),
            Err(SerializationError::Inconsistent)
        ));
    }

    #[test]
    fn out_of_range_hole_pointer_is_invalid() {
        let state = played_round();
        let mut value: serde_json::Value = serde_json::from_str(&to_json(&state).unwrap()).unwrap();
        value["current_hole"] = serde_json::json!(0);
        let err = from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::Invalid(InvalidInput::UnknownHole(0))
        ));
    }

    #[test]
    fn corrupt_save_falls_back_to_fresh_round() {
        let fresh = RoundState::new(
            make_players(2),
            rules(2, 1, 0, 1, 2, false),
            default_course(),
            RoundOptions::default(),
        )
        .unwrap();
        let expected = fresh.clone();
        let loaded = load_or_fresh("]]corrupt[[", move || fresh);
        assert_eq!(loaded, expected);
    }

    #[test]
    fn valid_save_is_kept_by_load_or_fresh() {
        let state = played_round();
        let json = to_json(&state).unwrap();
        let loaded: RoundState = load_or_fresh(&json, || panic!("should not start fresh"));
        assert_eq!(loaded, state);
    }

    #[test]
    fn optional_fallback_reports_no_round() {
        let state = played_round();
        let json = to_json(&state).unwrap();
        assert_eq!(load_or_fresh::<Option<RoundState>>(&json, || None), Some(state));
        assert_eq!(load_or_fresh::<Option<RoundState>>("{}", || None), None);
    }
}
