//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the terminal dimensions so render functions can
//! make sizing decisions without threading raw width/height everywhere.

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Compact terminal (< 80 columns)
    pub const COMPACT_WIDTH: u16 = 80;
    /// Compact terminal height (< 24 rows)
    pub const COMPACT_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True on terminals too small for the full column set.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::COMPACT_WIDTH || self.height < breakpoints::COMPACT_HEIGHT
    }

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_compact_by_width_and_height() {
        assert!(LayoutContext::new(60, 40).is_compact());
        assert!(LayoutContext::new(120, 20).is_compact());
        assert!(!LayoutContext::new(120, 40).is_compact());
    }

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_width(0), 1);
    }
}
