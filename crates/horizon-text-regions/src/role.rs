//! Accessibility roles and region traits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The accessibility role of a text fragment.
///
/// This is the small set of roles a span inside a paragraph can carry. Each
/// role maps to a fixed [`RegionTraits`] set via [`AccessibilityRole::traits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum AccessibilityRole {
    /// A hyperlink.
    Link,

    /// A push button.
    Button,

    /// A section header.
    Header,

    /// An image.
    Image,

    /// An image that behaves like a button.
    ImageButton,

    /// A key on a virtual keyboard.
    KeyboardKey,

    /// A search field.
    Search,

    /// Summary information shown when the surface first appears.
    Summary,

    /// Important, time-sensitive content.
    Alert,

    /// A checkbox that can be checked or unchecked.
    CheckBox,

    /// A radio button.
    Radio,

    /// An on/off switch.
    Switch,

    /// A single tab.
    Tab,

    /// A menu item.
    MenuItem,

    /// Static text.
    Text,
}

impl AccessibilityRole {
    /// Parse a role from its host prop spelling (case-insensitive).
    ///
    /// Returns `None` for `"none"` and for unknown roles.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "link" => Self::Link,
            "button" => Self::Button,
            "header" | "heading" => Self::Header,
            "image" | "img" => Self::Image,
            "imagebutton" => Self::ImageButton,
            "keyboardkey" => Self::KeyboardKey,
            "search" => Self::Search,
            "summary" => Self::Summary,
            "alert" => Self::Alert,
            "checkbox" => Self::CheckBox,
            "radio" => Self::Radio,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "menuitem" => Self::MenuItem,
            "text" => Self::Text,
            _ => return None,
        })
    }

    /// The trait set a region with this role carries.
    pub fn traits(self) -> RegionTraits {
        match self {
            Self::Link => RegionTraits::LINK,
            Self::Button => RegionTraits::BUTTON,
            Self::Header => RegionTraits::HEADER,
            Self::Image => RegionTraits::IMAGE,
            Self::ImageButton => RegionTraits::IMAGE | RegionTraits::BUTTON,
            Self::KeyboardKey => RegionTraits::KEYBOARD_KEY,
            Self::Search => RegionTraits::SEARCH_FIELD,
            Self::Summary => RegionTraits::SUMMARY,
            Self::Alert => RegionTraits::ALERT,
            Self::CheckBox | Self::Radio | Self::Switch => RegionTraits::TOGGLE,
            Self::Tab => RegionTraits::TAB,
            Self::MenuItem => RegionTraits::MENU_ITEM,
            Self::Text => RegionTraits::STATIC_TEXT,
        }
    }

    /// Check if the role describes something the user can activate.
    pub fn is_actionable(self) -> bool {
        !self.traits().actionable().is_empty()
    }

    /// Convert to AccessKit's Role enum.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        use accesskit::Role;

        match self {
            AccessibilityRole::Link => Role::Link,
            AccessibilityRole::Button => Role::Button,
            AccessibilityRole::Header => Role::Heading,
            AccessibilityRole::Image => Role::Image,
            AccessibilityRole::ImageButton => Role::Button,
            AccessibilityRole::KeyboardKey => Role::Button, // No key role, use Button
            AccessibilityRole::Search => Role::SearchInput,
            AccessibilityRole::Summary => Role::Label,
            AccessibilityRole::Alert => Role::Alert,
            AccessibilityRole::CheckBox => Role::CheckBox,
            AccessibilityRole::Radio => Role::RadioButton,
            AccessibilityRole::Switch => Role::Switch,
            AccessibilityRole::Tab => Role::Tab,
            AccessibilityRole::MenuItem => Role::MenuItem,
            AccessibilityRole::Text => Role::Label,
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibilityRole> for accesskit::Role {
    fn from(role: AccessibilityRole) -> Self {
        role.to_accesskit_role()
    }
}

bitflags::bitflags! {
    /// Traits carried by an accessibility region.
    ///
    /// A bit set, so two trait sets compare equal regardless of the order in
    /// which their traits were added.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct RegionTraits: u32 {
        const LINK = 1 << 0;
        const BUTTON = 1 << 1;
        const HEADER = 1 << 2;
        const IMAGE = 1 << 3;
        const KEYBOARD_KEY = 1 << 4;
        const SEARCH_FIELD = 1 << 5;
        const SUMMARY = 1 << 6;
        const STATIC_TEXT = 1 << 7;
        const ALERT = 1 << 8;
        const TOGGLE = 1 << 9;
        const TAB = 1 << 10;
        const MENU_ITEM = 1 << 11;
    }
}

impl RegionTraits {
    /// Traits the user can activate.
    pub const ACTIONABLE: Self = Self::LINK
        .union(Self::BUTTON)
        .union(Self::KEYBOARD_KEY)
        .union(Self::TOGGLE)
        .union(Self::TAB)
        .union(Self::MENU_ITEM);

    /// The actionable subset of these traits.
    pub fn actionable(self) -> Self {
        self & Self::ACTIONABLE
    }

    /// The single role that best describes this trait set.
    ///
    /// Used when a platform needs one role per node. Buttons win over links,
    /// links over headers, and so on down to static text.
    pub fn primary_role(self) -> Option<AccessibilityRole> {
        let role = if self.contains(Self::IMAGE | Self::BUTTON) {
            AccessibilityRole::ImageButton
        } else if self.contains(Self::BUTTON) {
            AccessibilityRole::Button
        } else if self.contains(Self::LINK) {
            AccessibilityRole::Link
        } else if self.contains(Self::KEYBOARD_KEY) {
            AccessibilityRole::KeyboardKey
        } else if self.contains(Self::TOGGLE) {
            AccessibilityRole::CheckBox
        } else if self.contains(Self::TAB) {
            AccessibilityRole::Tab
        } else if self.contains(Self::MENU_ITEM) {
            AccessibilityRole::MenuItem
        } else if self.contains(Self::SEARCH_FIELD) {
            AccessibilityRole::Search
        } else if self.contains(Self::HEADER) {
            AccessibilityRole::Header
        } else if self.contains(Self::IMAGE) {
            AccessibilityRole::Image
        } else if self.contains(Self::ALERT) {
            AccessibilityRole::Alert
        } else if self.contains(Self::SUMMARY) {
            AccessibilityRole::Summary
        } else if self.contains(Self::STATIC_TEXT) {
            AccessibilityRole::Text
        } else {
            return None;
        };
        Some(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(AccessibilityRole::parse("link"), Some(AccessibilityRole::Link));
        assert_eq!(AccessibilityRole::parse("Button"), Some(AccessibilityRole::Button));
        assert_eq!(AccessibilityRole::parse("heading"), Some(AccessibilityRole::Header));
        assert_eq!(AccessibilityRole::parse("none"), None);
        assert_eq!(AccessibilityRole::parse("spinbutton"), None);
    }

    #[test]
    fn test_role_traits() {
        assert_eq!(AccessibilityRole::Link.traits(), RegionTraits::LINK);
        assert_eq!(
            AccessibilityRole::ImageButton.traits(),
            RegionTraits::BUTTON | RegionTraits::IMAGE
        );
        assert!(AccessibilityRole::Button.is_actionable());
        assert!(!AccessibilityRole::Header.is_actionable());
    }

    #[test]
    fn test_trait_order_does_not_matter() {
        let a = RegionTraits::LINK | RegionTraits::STATIC_TEXT;
        let b = RegionTraits::STATIC_TEXT | RegionTraits::LINK;
        assert_eq!(a, b);
    }

    #[test]
    fn test_primary_role() {
        assert_eq!(
            (RegionTraits::LINK | RegionTraits::STATIC_TEXT).primary_role(),
            Some(AccessibilityRole::Link)
        );
        assert_eq!(
            (RegionTraits::IMAGE | RegionTraits::BUTTON).primary_role(),
            Some(AccessibilityRole::ImageButton)
        );
        assert_eq!(
            RegionTraits::STATIC_TEXT.primary_role(),
            Some(AccessibilityRole::Text)
        );
        assert_eq!(RegionTraits::empty().primary_role(), None);
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accesskit_mapping() {
        assert_eq!(AccessibilityRole::Link.to_accesskit_role(), accesskit::Role::Link);
        assert_eq!(
            accesskit::Role::from(AccessibilityRole::Header),
            accesskit::Role::Heading
        );
    }
}
