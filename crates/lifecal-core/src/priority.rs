//! Category priorities and styles.
//!
//! Lower priority wins. Categories without a configured entry get
//! [`DEFAULT_PRIORITY`] and a color derived from a hash of their name, so
//! the table is total over every category name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Priority of categories missing from the table.
pub const DEFAULT_PRIORITY: i32 = 999;

/// Foreground used for derived styles.
const DEFAULT_FG: &str = "#ffffff";

/// Display style and priority of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryStyle {
    pub priority: i32,
    pub fg: String,
    pub bg: String,
    pub bold: bool,
    pub italic: bool,
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            fg: String::new(),
            bg: String::new(),
            bold: false,
            italic: false,
        }
    }
}

impl CategoryStyle {
    /// Style for a category without configuration.
    pub fn derived(name: &str) -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            fg: DEFAULT_FG.to_string(),
            bg: color_from_name(name),
            bold: false,
            italic: false,
        }
    }
}

/// Name → style lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPriority {
    styles: BTreeMap<String, CategoryStyle>,
}

impl CategoryPriority {
    pub fn new(styles: BTreeMap<String, CategoryStyle>) -> Self {
        Self { styles }
    }

    /// Set the priority of `name`, keeping any configured colors.
    pub fn with_priority(mut self, name: impl Into<String>, priority: i32) -> Self {
        self.styles.entry(name.into()).or_default().priority = priority;
        self
    }

    /// Configured priority of `name`, or [`DEFAULT_PRIORITY`].
    pub fn priority(&self, name: &str) -> i32 {
        self.styles
            .get(name)
            .map_or(DEFAULT_PRIORITY, |style| style.priority)
    }

    /// Configured style of `name`, or one derived from the name.
    pub fn style(&self, name: &str) -> CategoryStyle {
        self.styles
            .get(name)
            .cloned()
            .unwrap_or_else(|| CategoryStyle::derived(name))
    }
}

impl FromIterator<(String, CategoryStyle)> for CategoryPriority {
    fn from_iter<I: IntoIterator<Item = (String, CategoryStyle)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Deterministic `#rrggbb` background for a category name.
pub fn color_from_name(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    // 141 is coprime with 360 and spreads neighbouring bytes around the wheel.
    let hue = u32::from(digest[0]) * 141 % 360;
    hsl_to_hex(hue, 0.7, 0.4)
}

fn hsl_to_hex(hue: u32, saturation: f64, lightness: f64) -> String {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (f64::from((hue / 60) % 2) - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match hue {
        0..60 => (c, x, 0.0),
        60..120 => (x, c, 0.0),
        120..180 => (0.0, c, x),
        180..240 => (0.0, x, c),
        240..300 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}
