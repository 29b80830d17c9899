//! Embeddable SVG badges showing a League of Legends solo queue rank.
//!
//! A Riot ID and region are resolved through the Riot API (account-v1 then
//! league-v4) into a [`rank::RankRecord`], which [`badge::BadgeRenderer`]
//! turns into a self-contained SVG document.

pub mod badge;
pub mod config;
pub mod error;
pub mod logging;
pub mod rank;
pub mod riot;
pub mod web;
