use serde::{Deserialize, Serialize};

use super::RoomCode;

/// One recorded match outcome. Field order matches the persisted layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub room: RoomCode,
    pub winner: String,
    #[serde(rename = "opponent")]
    pub opponents: Vec<String>,
    pub uma: String,
}

/// Split a comma-separated opponent input into trimmed names, dropping empty
/// segments. The caller rejects an empty result.
pub fn parse_opponents(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opponents_trims_each_name() {
        assert_eq!(
            parse_opponents("Alice, Bob ,Carol"),
            vec!["Alice", "Bob", "Carol"]
        );
    }

    #[test]
    fn test_parse_opponents_drops_empty_segments() {
        assert_eq!(parse_opponents("Alice,,Bob, "), vec!["Alice", "Bob"]);
        assert!(parse_opponents("  ").is_empty());
    }

    #[test]
    fn test_persisted_field_names() {
        let result = MatchResult {
            room: RoomCode::parse("A-1").unwrap(),
            winner: "u1".to_string(),
            opponents: vec!["Bob".to_string()],
            uma: "Special Week".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "room": "A-1",
                "winner": "u1",
                "opponent": ["Bob"],
                "uma": "Special Week",
            })
        );
    }
}
