//! Drawing colors.

/// The drawing palette's color values.
///
/// Colors select scales at playback time through the [`Palette`]; a color
/// the palette has no entry for falls back to the default scale.
///
/// [`Palette`]: crate::Palette
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    pub const COUNT: usize = 6;

    pub const ALL: [Color; Color::COUNT] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    /// Stable index for palette table lookup.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }

    /// Parse a color name (lowercase). Used by input adapters.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.iter().copied().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn indices_are_distinct_and_in_range() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }
}
