pub mod cache;
pub mod characters;
pub mod losses;
pub mod report;
pub mod search;

pub use cache::{Cache, CacheError, PlayerRecord};
pub use characters::{AssetState, character_asset, resolve_character_tag};
pub use losses::{LossLine, NO_LOSSES, format_losses, parse_loss_line};
pub use report::player_report;
pub use search::{match_candidates, match_candidates_limited};
