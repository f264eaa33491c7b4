use crate::sidc::StandardIdentity;

/// Rendering mode of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Default,
    /// The feature is the single selection and can be edited.
    Selected,
    /// The feature is part of a multi-selection.
    MultiSelect,
}

impl Mode {
    /// Returns `true` if interaction handles are drawn in this mode.
    #[must_use]
    pub fn shows_handles(self) -> bool {
        matches!(self, Self::Selected | Self::MultiSelect)
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const FRIEND: Self = Self::rgb(0, 107, 140);
    pub const HOSTILE: Self = Self::rgb(200, 0, 0);
    pub const NEUTRAL: Self = Self::rgb(0, 160, 0);
    pub const UNKNOWN: Self = Self::rgb(225, 220, 0);
    pub const SELECTION: Self = Self::rgb(255, 0, 255);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Colors available to fill resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Affiliation color of the symbol.
    pub primary: Color,
    /// Outline drawn beneath strokes for contrast.
    pub halo: Color,
    /// Stroke of reference wire frames; highlighted while selected.
    pub accent: Color,
}

impl Palette {
    /// Derives the palette for a mode and standard identity.
    #[must_use]
    pub fn new(mode: Mode, identity: StandardIdentity) -> Self {
        let primary = match identity {
            StandardIdentity::Friend => Color::FRIEND,
            StandardIdentity::Hostile => Color::HOSTILE,
            StandardIdentity::Neutral => Color::NEUTRAL,
            StandardIdentity::Unknown => Color::UNKNOWN,
        };
        let accent = if mode == Mode::Default {
            primary
        } else {
            Color::SELECTION
        };
        Self {
            primary,
            halo: Color::WHITE,
            accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_follows_identity() {
        assert_eq!(Palette::new(Mode::Default, StandardIdentity::Hostile).primary, Color::HOSTILE);
        assert_eq!(Palette::new(Mode::Selected, StandardIdentity::Friend).primary, Color::FRIEND);
    }

    #[test]
    fn selection_changes_accent_only() {
        let plain = Palette::new(Mode::Default, StandardIdentity::Neutral);
        let selected = Palette::new(Mode::Selected, StandardIdentity::Neutral);
        assert_eq!(plain.accent, Color::NEUTRAL);
        assert_eq!(selected.accent, Color::SELECTION);
        assert_eq!(plain.primary, selected.primary);
    }

    #[test]
    fn handles_only_when_selected() {
        assert!(!Mode::Default.shows_handles());
        assert!(Mode::Selected.shows_handles());
        assert!(Mode::MultiSelect.shows_handles());
    }
}
