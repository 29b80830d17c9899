use std::sync::Arc;

use base64::Engine;
use tracing::debug;

use super::{BadgeAssets, FONT_FAMILY, FONT_SIZE, escape_xml};
use crate::error::AppError;
use crate::rank::RankRecord;

const SVG_TEMPLATE: &str = include_str!("../../assets/badge_template.svg");

pub const BADGE_HEIGHT: u32 = 28;
const ICON_SIZE: u32 = 28;
const LETTER_SPACING: f32 = 1.0;
const PADDING: f32 = 22.0;
const ICON_SLOT: f32 = 35.0;

pub struct BadgeRenderer {
    assets: Arc<dyn BadgeAssets>,
}

impl BadgeRenderer {
    pub fn new(assets: Arc<dyn BadgeAssets>) -> Self {
        Self { assets }
    }

    /// Text shown on the badge: the tier when asked for (or on error), the Riot ID otherwise.
    pub fn label(record: &RankRecord, use_tier_name: bool) -> String {
        if use_tier_name || record.tier.is_error() {
            record.tier.as_str().to_uppercase()
        } else {
            record.player.to_string()
        }
    }

    /// Badge width needed to fit `label` next to the icon.
    pub fn width(&self, label: &str) -> u32 {
        let spacing = label.chars().count() as f32 * LETTER_SPACING;
        let width = self.assets.text_width(label).max(0.0) + spacing + PADDING + ICON_SLOT;

        width.ceil() as u32
    }

    /// Renders the SVG document for `record`. Fails only when a local asset is missing.
    pub fn render(&self, record: &RankRecord, use_tier_name: bool) -> Result<String, AppError> {
        let label = Self::label(record, use_tier_name);
        let width = self.width(&label);
        let icon = self.assets.tier_icon(&record.tier)?;
        let icon_b64 = base64::engine::general_purpose::STANDARD.encode(&icon);

        let svg = SVG_TEMPLATE
            .replace("{{width}}", &width.to_string())
            .replace("{{height}}", &BADGE_HEIGHT.to_string())
            .replace("{{color}}", record.tier.color())
            .replace("{{icon}}", &icon_b64)
            .replace("{{icon_size}}", &ICON_SIZE.to_string())
            .replace("{{font_family}}", FONT_FAMILY)
            .replace("{{font_size}}", &FONT_SIZE.to_string())
            .replace("{{letter_spacing}}", &LETTER_SPACING.to_string())
            // Last, so caller text is never scanned for placeholders.
            .replace("{{label}}", &escape_xml(&label));

        debug!(
            tier = %record.tier,
            width,
            size = svg.len(),
            "🖼️ ✅ Badge rendered"
        );
        Ok(svg)
    }
}
