use crate::cache::PlayerRecord;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Decorated chat-emoji form `<:name:numericId>`, anchored at the start.
// Tags without a numeric id intentionally stay unrecognized.
static DECORATED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<:([^:]+):\d+>").expect("valid tag pattern"));

/// Extract the character name from a decorated tag like `<:mario:123456>`.
/// Anything that doesn't match the decorated form passes through unchanged.
pub fn resolve_character_tag(tag: &str) -> &str {
    match DECORATED_TAG.captures(tag) {
        Some(captures) => captures.get(1).map_or(tag, |name| name.as_str()),
        None => tag,
    }
}

/// Whether a character image can be shown for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetState {
    /// `<imagesDir>/<name>.png` exists on disk.
    Available(PathBuf),
    /// The character resolved but its image file is absent.
    Missing(PathBuf),
    /// The record has no character list to resolve from.
    NoCharacter,
}

/// Derive the image path for a record's first character tag and check
/// whether the file is actually present.
pub fn character_asset(images_dir: &Path, record: &PlayerRecord) -> AssetState {
    let Some(tag) = record.character.first() else {
        return AssetState::NoCharacter;
    };

    let name = resolve_character_tag(tag);
    let path = images_dir.join(format!("{name}.png"));
    if path.is_file() {
        AssetState::Available(path)
    } else {
        AssetState::Missing(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorated_tag_resolves_to_name() {
        assert_eq!(resolve_character_tag("<:mario:123456>"), "mario");
    }

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(resolve_character_tag("mario"), "mario");
    }

    #[test]
    fn malformed_tag_passes_through() {
        assert_eq!(resolve_character_tag("<:weird"), "<:weird");
        assert_eq!(resolve_character_tag("<:no_id:>"), "<:no_id:>");
    }

    #[test]
    fn trailing_text_after_decorated_tag_is_ignored() {
        assert_eq!(resolve_character_tag("<:fox:42> extra"), "fox");
    }

    fn record_with_characters(tags: &[&str]) -> PlayerRecord {
        PlayerRecord {
            character: tags.iter().map(|tag| tag.to_string()).collect(),
            ..PlayerRecord::default()
        }
    }

    #[test]
    fn empty_character_list_has_no_asset() {
        let record = record_with_characters(&[]);
        assert_eq!(
            character_asset(Path::new("images"), &record),
            AssetState::NoCharacter
        );
    }

    #[test]
    fn missing_image_file_reports_derived_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let record = record_with_characters(&["<:mario:123456>", "<:fox:42>"]);

        let expected = dir.path().join("mario.png");
        assert_eq!(
            character_asset(dir.path(), &record),
            AssetState::Missing(expected)
        );
    }

    #[test]
    fn present_image_file_is_available() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("fox.png"), b"png").expect("write image");
        let record = record_with_characters(&["fox"]);

        let expected = dir.path().join("fox.png");
        assert_eq!(
            character_asset(dir.path(), &record),
            AssetState::Available(expected)
        );
    }
}
