use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use usvg::fontdb::Database;
use usvg::{Options, Tree};

use super::{FONT_SIZE, escape_xml};
use crate::error::AppError;
use crate::rank::RankTier;

const FONTS_DIR: &str = "fonts";

/// Family the bundled `fonts/` folder provides, used when Verdana is absent.
const BUNDLED_FAMILY: &str = "DejaVu Sans";

/// Family chain used to measure labels. Faces missing a glyph are swapped for
/// any loaded face that has it, but only once one of these families matched.
const MEASURE_FAMILIES: &str = "Verdana, 'DejaVu Sans', 'Noto Sans CJK JP', sans-serif";

/// Average bold advance relative to the font size.
const ESTIMATED_ADVANCE: f32 = 0.65;

/// Icons and text metrics the renderer depends on.
pub trait BadgeAssets: Send + Sync {
    /// PNG bytes of the icon shown for `tier`.
    fn tier_icon(&self, tier: &RankTier) -> Result<Vec<u8>, AppError>;

    /// Rendered width in pixels of `text` in the badge font, without letter spacing.
    fn text_width(&self, text: &str) -> f32;
}

/// Assets read from a directory: `{tier}.png` icons plus a `fonts/` folder.
pub struct FsAssets {
    dir: PathBuf,
    fontdb: Arc<Database>,
}

impl FsAssets {
    pub fn load(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();

        let mut fontdb = Database::new();
        fontdb.load_system_fonts();
        let system_fonts = fontdb.len();

        let fonts_dir = dir.join(FONTS_DIR);
        fontdb.load_fonts_dir(&fonts_dir);
        let bundled_fonts = fontdb.len() - system_fonts;
        if bundled_fonts == 0 {
            warn!(
                path = %fonts_dir.display(),
                "🖼️ ⚠️ No badge fonts found, widths rely on system fonts"
            );
        }

        // `sans-serif` closes the chain, point it at a face we ship.
        fontdb.set_sans_serif_family(BUNDLED_FAMILY);

        info!(
            system_fonts,
            bundled_fonts,
            dir = %dir.display(),
            "🖼️ Badge assets ready"
        );

        Self {
            dir,
            fontdb: Arc::new(fontdb),
        }
    }

    fn measure(&self, text: &str) -> Result<f32, usvg::Error> {
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="4096" height="64"><text x="0" y="32" font-family="{MEASURE_FAMILIES}" font-size="{FONT_SIZE}" font-weight="bold">{}</text></svg>"#,
            escape_xml(text)
        );

        let options = Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };

        let tree = Tree::from_str(&svg, &options)?;
        Ok(tree.root().bounding_box().width())
    }

    fn estimate_width(text: &str) -> f32 {
        text.chars().count() as f32 * FONT_SIZE * ESTIMATED_ADVANCE
    }
}

impl BadgeAssets for FsAssets {
    fn tier_icon(&self, tier: &RankTier) -> Result<Vec<u8>, AppError> {
        let path = self.dir.join(format!("{}.png", tier.icon_name()));

        std::fs::read(&path).map_err(|source| AppError::Asset {
            path: path.display().to_string(),
            source,
        })
    }

    fn text_width(&self, text: &str) -> f32 {
        if text.trim().is_empty() {
            return 0.0;
        }

        match self.measure(text) {
            Ok(width) if width > 0.0 => width,
            Ok(_) => {
                warn!(text, "🖼️ ⚠️ No face could lay out label, estimating width");
                Self::estimate_width(text)
            }
            Err(e) => {
                warn!(error = %e, "🖼️ ⚠️ Text layout failed, estimating width");
                Self::estimate_width(text)
            }
        }
    }
}
