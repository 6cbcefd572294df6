use std::fmt;

/// Report text used when a player has no recorded losses.
pub const NO_LOSSES: &str = "No losses recorded.";

/// One loss-log line, either parsed into opponent and repeat count or kept
/// verbatim when the line doesn't have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LossLine {
    Parsed { opponent: String, count: u32 },
    Raw(String),
}

impl fmt::Display for LossLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossLine::Parsed { opponent, count } => write!(f, "{opponent}: x{count}"),
            LossLine::Raw(entry) => f.write_str(entry),
        }
    }
}

/// Parse a raw loss-log entry such as `"Vibe x2 <:pokemon_trainer:123>"`.
///
/// The entry splits on the first `" x"`; the count is the run of digits
/// immediately after it, which drops any trailing emoji-style marker
/// without parsing it. No delimiter means the whole entry is unparseable
/// and stays raw. Missing digits default the count to 1.
pub fn parse_loss_line(entry: &str) -> LossLine {
    let Some((opponent, rest)) = entry.split_once(" x") else {
        return LossLine::Raw(entry.to_string());
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let count = if digits.is_empty() {
        1
    } else {
        digits.parse().unwrap_or(1)
    };

    LossLine::Parsed {
        opponent: opponent.trim().to_string(),
        count,
    }
}

/// Newline-joined loss report in input order. A malformed entry degrades to
/// its raw text on its own line; the rest of the batch is unaffected.
pub fn format_losses(entries: &[String]) -> String {
    if entries.is_empty() {
        return NO_LOSSES.to_string();
    }

    entries
        .iter()
        .map(|entry| parse_loss_line(entry).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
