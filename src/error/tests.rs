//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod draft_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        // Create a JSON error by trying to parse invalid JSON
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let draft_error = DraftError::from(json_error);

        match draft_error {
            DraftError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let draft_error = DraftError::from(io_error);

        match draft_error {
            DraftError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error message");
        let draft_error = DraftError::from(anyhow_error);

        match draft_error {
            DraftError::Storage { message } => {
                assert!(message.contains("Test anyhow error message"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_unknown_rank_token_error() {
        let error = DraftError::UnknownRankToken {
            token: "wood".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("unrecognized rank token"));
        assert!(error_string.contains("wood"));
    }

    #[test]
    fn test_invalid_division_error() {
        let error = DraftError::InvalidDivision { value: 7 };

        let error_string = error.to_string();
        assert!(error_string.contains("invalid division 7"));
        assert!(error_string.contains("expected 1-4"));
    }

    #[test]
    fn test_invalid_season_label_error() {
        let error = DraftError::InvalidSeasonLabel {
            label: "Season Three".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("invalid season label"));
        assert!(error_string.contains("Season Three"));
    }

    #[test]
    fn test_storage_error() {
        let error = DraftError::Storage {
            message: "Failed to write profile store".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("profile store error"));
        assert!(error_string.contains("Failed to write profile store"));
    }

    #[test]
    fn test_player_not_found_error() {
        let error = DraftError::PlayerNotFound {
            name: "honeynutwoomy".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("player not found"));
        assert!(error_string.contains("honeynutwoomy"));
    }
}
