mod record;
mod resolver;
mod tier;

pub use record::{
    MAX_NAME_CHARS, MAX_TAG_CHARS, NO_DIVISION, PlayerIdentity, RankRecord, SPACE_PLACEHOLDER,
};
pub use resolver::RankResolver;
pub use tier::{FALLBACK_COLOR, RankTier};
