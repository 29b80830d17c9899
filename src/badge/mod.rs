mod assets;
mod renderer;

pub use assets::{BadgeAssets, FsAssets};
pub use renderer::BadgeRenderer;

pub const FONT_FAMILY: &str = "Verdana";
pub const FONT_SIZE: f32 = 11.0;

pub(crate) fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
