//! Logging and debugging facilities for region synthesis.
//!
//! This module provides:
//! - Target names for filtering the `tracing` events this crate emits
//! - Debug visualization for synthesized region lists
//!
//! # Tracing Integration
//!
//! Decomposition, synthesis and the provider are instrumented with `tracing`.
//! To see the events, install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_text_regions=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! Use [`RegionListDebug`] to print what a screen reader would walk through:
//!
//! ```
//! use horizon_text_regions::{AccessibilityRegion, Rect, RegionTraits};
//! use horizon_text_regions::logging::RegionListDebug;
//!
//! let regions = vec![AccessibilityRegion {
//!     frame: Rect::new(0.0, 0.0, 40.0, 20.0),
//!     label: "Docs".into(),
//!     hint: None,
//!     traits: RegionTraits::LINK,
//!     source_range: 0..4,
//! }];
//!
//! let output = RegionListDebug::new().format(&regions);
//! assert!(output.contains("\"Docs\" link [0..4]"));
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::geometry::Rect;
use crate::role::RegionTraits;
use crate::synthesize::AccessibilityRegion;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Document decomposition target.
    pub const DECOMPOSE: &str = "horizon_text_regions::decompose";
    /// Region synthesis target.
    pub const SYNTHESIZE: &str = "horizon_text_regions::synthesize";
    /// Provider cache and staleness target.
    pub const PROVIDER: &str = "horizon_text_regions::provider";
    /// Paragraph shaping and geometry queries in the layout crate.
    pub const LAYOUT: &str = "horizon_text_regions_layout";
}

/// Style options for region list visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for region list debug output.
#[derive(Debug, Clone)]
pub struct RegionFormatOptions {
    /// The style of visualization.
    pub style: TreeStyle,
    /// Whether to show trait names.
    pub show_traits: bool,
    /// Whether to show source byte ranges.
    pub show_ranges: bool,
    /// Whether to show frames.
    pub show_frames: bool,
    /// Whether to show hints on their own line.
    pub show_hints: bool,
}

impl Default for RegionFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_traits: true,
            show_ranges: true,
            show_frames: false,
            show_hints: true,
        }
    }
}

impl RegionFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_frames: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output: labels only.
    pub fn minimal() -> Self {
        Self {
            show_traits: false,
            show_ranges: false,
            show_frames: false,
            show_hints: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing synthesized regions in reading order.
#[derive(Debug, Clone, Default)]
pub struct RegionListDebug {
    options: RegionFormatOptions,
}

impl RegionListDebug {
    /// Create a new visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: RegionFormatOptions) -> Self {
        Self { options }
    }

    /// Format `regions` into a string.
    pub fn format(&self, regions: &[AccessibilityRegion]) -> String {
        self.display(regions).to_string()
    }

    /// A [`fmt::Display`] view of `regions`, for use in log fields.
    pub fn display<'a>(&'a self, regions: &'a [AccessibilityRegion]) -> impl fmt::Display + 'a {
        DisplayRegions {
            debug: self,
            regions,
        }
    }

    fn write_list(&self, regions: &[AccessibilityRegion], out: &mut impl FmtWrite) -> fmt::Result {
        if self.options.style == TreeStyle::Compact {
            write!(out, "Regions ({}): ", regions.len())?;
            if regions.is_empty() {
                return out.write_str("(empty)");
            }
            for (i, region) in regions.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                self.write_region(region, out)?;
            }
            return Ok(());
        }

        writeln!(out, "Regions ({}):", regions.len())?;
        if regions.is_empty() {
            return writeln!(out, "  (empty)");
        }

        let (tee, corner, bar) = match self.options.style {
            TreeStyle::Ascii => ("+-- ", "`-- ", "|   "),
            _ => ("\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} ", "\u{2502}   "),
        };

        let count = regions.len();
        for (i, region) in regions.iter().enumerate() {
            let is_last = i == count - 1;
            out.write_str(if is_last { corner } else { tee })?;
            self.write_region(region, out)?;
            out.write_char('\n')?;

            if self.options.show_hints
                && let Some(hint) = &region.hint
            {
                let continuation = if is_last { "    " } else { bar };
                writeln!(out, "{continuation}  hint: {hint:?}")?;
            }
        }
        Ok(())
    }

    fn write_region(&self, region: &AccessibilityRegion, out: &mut impl FmtWrite) -> fmt::Result {
        write!(out, "{:?}", region.label)?;
        if self.options.show_traits && !region.traits.is_empty() {
            out.write_char(' ')?;
            write_traits(region.traits, out)?;
        }
        if self.options.show_ranges {
            write!(out, " [{}..{}]", region.source_range.start, region.source_range.end)?;
        }
        if self.options.show_frames {
            out.write_char(' ')?;
            write_frame(&region.frame, out)?;
        }
        Ok(())
    }
}

struct DisplayRegions<'a> {
    debug: &'a RegionListDebug,
    regions: &'a [AccessibilityRegion],
}

impl fmt::Display for DisplayRegions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.debug.write_list(self.regions, f)
    }
}

fn write_traits(traits: RegionTraits, out: &mut impl FmtWrite) -> fmt::Result {
    for (i, (name, _)) in traits.iter_names().enumerate() {
        if i > 0 {
            out.write_char('|')?;
        }
        for c in name.chars() {
            out.write_char(if c == '_' { ' ' } else { c.to_ascii_lowercase() })?;
        }
    }
    Ok(())
}

fn write_frame(frame: &Rect, out: &mut impl FmtWrite) -> fmt::Result {
    write!(
        out,
        "@ ({:.1}, {:.1}) {:.1}x{:.1}",
        frame.left(),
        frame.top(),
        frame.width(),
        frame.height()
    )
}
