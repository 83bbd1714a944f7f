//! Paragraph layout options.

use cosmic_text::Wrap;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    /// Left-aligned text.
    #[default]
    Left,
    /// Center-aligned text.
    Center,
    /// Right-aligned text.
    Right,
    /// Justified text (stretched to fill width).
    Justified,
}

impl HorizontalAlign {
    /// Convert to cosmic-text Align.
    pub(crate) fn to_cosmic(self) -> cosmic_text::Align {
        match self {
            HorizontalAlign::Left => cosmic_text::Align::Left,
            HorizontalAlign::Center => cosmic_text::Align::Center,
            HorizontalAlign::Right => cosmic_text::Align::Right,
            HorizontalAlign::Justified => cosmic_text::Align::Justified,
        }
    }
}

/// Text wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    /// No wrapping - text extends beyond bounds.
    None,
    /// Wrap at word boundaries.
    Word,
    /// Wrap at character boundaries.
    Character,
    /// Word wrap with character fallback for long words.
    #[default]
    WordOrCharacter,
}

impl WrapMode {
    /// Convert to cosmic-text Wrap.
    pub(crate) fn to_cosmic(self) -> Wrap {
        match self {
            WrapMode::None => Wrap::None,
            WrapMode::Word => Wrap::Word,
            WrapMode::Character => Wrap::Glyph,
            WrapMode::WordOrCharacter => Wrap::WordOrGlyph,
        }
    }
}

/// Options for shaping a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphOptions {
    /// Maximum width for the paragraph (None = unconstrained).
    pub max_width: Option<f32>,
    /// Maximum height for the paragraph (None = unconstrained).
    pub max_height: Option<f32>,
    /// Line height multiplier (1.0 = normal, 1.5 = 150%).
    pub line_height_multiplier: f32,
    /// Font size used for fragments without a size override.
    pub font_size: f32,
    /// Text wrapping mode.
    pub wrap: WrapMode,
    /// Horizontal text alignment.
    pub align: HorizontalAlign,
}

impl Default for ParagraphOptions {
    fn default() -> Self {
        Self {
            max_width: None,
            max_height: None,
            line_height_multiplier: 1.2,
            font_size: 16.0,
            wrap: WrapMode::default(),
            align: HorizontalAlign::default(),
        }
    }
}

impl ParagraphOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum width.
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the maximum height.
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Set the line height multiplier.
    pub fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height_multiplier = multiplier;
        self
    }

    /// Set the base font size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the wrap mode.
    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the horizontal alignment.
    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Line height for text at `font_size`.
    pub fn line_height_for(&self, font_size: f32) -> f32 {
        font_size * self.line_height_multiplier
    }
}
