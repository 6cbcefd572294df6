use crate::cache::PlayerRecord;
use crate::characters::{AssetState, character_asset, resolve_character_tag};
use crate::losses::format_losses;
use std::path::Path;

/// Multi-line view of one player's record, ready to print verbatim.
pub fn player_report(record: &PlayerRecord, images_dir: &Path) -> String {
    let name = record.display_name.as_deref().unwrap_or("(unknown player)");

    let mut lines = vec![name.to_string()];

    match character_asset(images_dir, record) {
        AssetState::Available(path) => {
            let tag = record.character.first().map(String::as_str).unwrap_or("");
            lines.push(format!(
                "Character: {} ({})",
                resolve_character_tag(tag),
                path.display()
            ));
        }
        AssetState::Missing(path) => {
            let tag = record.character.first().map(String::as_str).unwrap_or("");
            lines.push(format!(
                "Character: {} (image missing: {})",
                resolve_character_tag(tag),
                path.display()
            ));
        }
        AssetState::NoCharacter => {
            lines.push("Found, but no character data.".to_string());
        }
    }

    lines.push(String::new());
    lines.push("Losses:".to_string());
    lines.push(format_losses(&record.losses));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::losses::NO_LOSSES;

    #[test]
    fn report_without_character_data() {
        let record = PlayerRecord {
            display_name: Some("Vibe".to_string()),
            character: Vec::new(),
            losses: vec!["Light x3".to_string()],
        };

        let report = player_report(&record, Path::new("images"));
        assert_eq!(report, "Vibe\nFound, but no character data.\n\nLosses:\nLight: x3");
    }

    #[test]
    fn report_notes_missing_image() {
        let dir = tempfile::tempdir().expect("temp dir");
        let record = PlayerRecord {
            display_name: Some("Aklo".to_string()),
            character: vec!["<:fox:42>".to_string()],
            losses: Vec::new(),
        };

        let report = player_report(&record, dir.path());
        let expected_path = dir.path().join("fox.png");
        assert!(report.contains(&format!("Character: fox (image missing: {})", expected_path.display())));
        assert!(report.ends_with(NO_LOSSES));
    }

    #[test]
    fn report_shows_available_image_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("fox.png"), b"png").expect("write image");
        let record = PlayerRecord {
            display_name: Some("Aklo".to_string()),
            character: vec!["fox".to_string()],
            losses: Vec::new(),
        };

        let report = player_report(&record, dir.path());
        let expected_path = dir.path().join("fox.png");
        assert!(report.contains(&format!("Character: fox ({})", expected_path.display())));
    }

    #[test]
    fn unnamed_record_gets_placeholder() {
        let record = PlayerRecord::default();
        let report = player_report(&record, Path::new("images"));
        assert!(report.starts_with("(unknown player)"));
    }
}
