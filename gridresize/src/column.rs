//! Column descriptors as the resize core sees them.
//!
//! Columns are owned by the grid; the resize core only reads their width and
//! constraints during hover and press, and writes the width once when a drag
//! is released.

use std::fmt;

use crate::config::ResizeConfig;

/// Column width as held by the grid model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColumnWidth {
    /// No explicit width, the layout decides.
    #[default]
    Auto,
    /// Fixed width in pixels.
    Pixels(u32),
    /// Any other CSS length (`"20%"`, `"12em"`, ...), kept verbatim.
    Css(String),
}

impl ColumnWidth {
    /// Leading integer of the width, the way a lenient CSS parser reads it.
    ///
    /// `Pixels(120)` and `"120px"` give 120, `"20%"` gives 20, `Auto` and
    /// strings without leading digits give `None`.
    pub fn numeric(&self) -> Option<i64> {
        match self {
            ColumnWidth::Auto => None,
            ColumnWidth::Pixels(px) => Some(i64::from(*px)),
            ColumnWidth::Css(s) => parse_leading_int(s),
        }
    }

    /// CSS text for this width, `None` for `Auto`.
    pub fn to_css(&self) -> Option<String> {
        match self {
            ColumnWidth::Auto => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Auto => write!(f, "auto"),
            ColumnWidth::Pixels(px) => write!(f, "{px}px"),
            ColumnWidth::Css(s) => write!(f, "{s}"),
        }
    }
}

impl From<u32> for ColumnWidth {
    fn from(px: u32) -> Self {
        ColumnWidth::Pixels(px)
    }
}

impl From<&str> for ColumnWidth {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return ColumnWidth::Auto;
        }
        let digits = trimmed.strip_suffix("px").unwrap_or(trimmed);
        match digits.parse::<u32>() {
            Ok(px) => ColumnWidth::Pixels(px),
            Err(_) => ColumnWidth::Css(trimmed.to_string()),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Optional per-column resize limits, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeConstraints {
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
}

impl ResizeConstraints {
    /// Min and max with the config defaults filled in. A zero limit counts
    /// as unset.
    pub fn effective(&self, config: &ResizeConfig) -> (u32, u32) {
        (
            self.min_width
                .filter(|w| *w > 0)
                .unwrap_or(config.default_min_width),
            self.max_width
                .filter(|w| *w > 0)
                .unwrap_or(config.default_max_width),
        )
    }

    /// Resizing is disabled unless the effective min is strictly below the
    /// effective max.
    pub fn is_resizable(&self, config: &ResizeConfig) -> bool {
        let (min, max) = self.effective(config);
        min < max
    }
}

/// A grid column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Unique within the column set.
    pub key: String,
    /// Header text.
    pub title: String,
    pub width: ColumnWidth,
    pub resize: ResizeConstraints,
}

impl Column {
    /// Create an auto-width column with default constraints.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: ColumnWidth::Auto,
            resize: ResizeConstraints::default(),
        }
    }

    pub fn width(mut self, width: impl Into<ColumnWidth>) -> Self {
        self.width = width.into();
        self
    }

    /// Set a fixed pixel width.
    pub fn fixed(mut self, px: u32) -> Self {
        self.width = ColumnWidth::Pixels(px);
        self
    }

    pub fn min_width(mut self, min: u32) -> Self {
        self.resize.min_width = Some(min);
        self
    }

    pub fn max_width(mut self, max: u32) -> Self {
        self.resize.max_width = Some(max);
        self
    }
}

/// Look up a column by key.
pub fn find_column_mut<'a>(columns: &'a mut [Column], key: &str) -> Option<&'a mut Column> {
    columns.iter_mut().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("120px"), Some(120));
        assert_eq!(parse_leading_int("  42%"), Some(42));
        assert_eq!(parse_leading_int("-3em"), Some(-3));
        assert_eq!(parse_leading_int("auto"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("px12"), None);
    }
}
