use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid room code: {0}")]
pub struct InvalidRoom(pub String);

/// Tournament match slot identifier of the form `<block>-<slot>`, where the
/// block is a letter A-H and the slot a number 1-15. Input is case-insensitive
/// and stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    pub fn parse(input: &str) -> Result<Self, InvalidRoom> {
        let normalized = input.trim().to_ascii_uppercase();

        let Some((block, slot)) = normalized.split_once('-') else {
            return Err(InvalidRoom(normalized));
        };

        let block_ok = block.len() == 1 && matches!(block.as_bytes()[0], b'A'..=b'H');
        // Canonical decimal only: "A-01" and "A-+5" are not valid codes.
        let slot_ok = slot
            .parse::<u8>()
            .is_ok_and(|n| (1..=15).contains(&n) && n.to_string() == slot);

        if !block_ok || !slot_ok {
            return Err(InvalidRoom(normalized));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let room = RoomCode::parse(" a-1 ").unwrap();
        assert_eq!(room.as_str(), "A-1");
    }

    #[test]
    fn test_parse_accepts_boundary_codes() {
        for code in ["A-1", "A-15", "H-1", "H-15", "C-8"] {
            assert!(RoomCode::parse(code).is_ok(), "expected {} to parse", code);
        }
    }

    #[test]
    fn test_parse_rejects_codes_outside_the_fixed_set() {
        for code in ["I-1", "A-0", "A-16", "A1", "A-01", "A-+5", "3-A", "", "-1", "A-"] {
            assert!(
                RoomCode::parse(code).is_err(),
                "expected {} to be rejected",
                code
            );
        }
    }

    #[test]
    fn test_rejected_input_is_reported_normalized() {
        let err = RoomCode::parse(" z-9 ").unwrap_err();
        assert_eq!(err, InvalidRoom("Z-9".to_string()));
        assert_eq!(err.to_string(), "invalid room code: Z-9");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let room = RoomCode::parse("B-12").unwrap();
        assert_eq!(serde_json::to_string(&room).unwrap(), "\"B-12\"");
    }
}
