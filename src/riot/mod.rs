mod client;
mod endpoints;
pub mod metrics;
pub mod region;
pub mod traits;
pub mod types;

pub use client::RiotClient;
pub use metrics::UpstreamMetrics;
pub use region::{Platform, Region, resolve_base_url};
pub use traits::{AccountApi, LeagueApi, RiotApi};
pub use types::{AccountDto, LeagueEntryDto, SOLO_QUEUE};
