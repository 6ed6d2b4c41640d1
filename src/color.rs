//! Additive light colors.

use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const NAMES: [&str; 8] = ["None", "Red", "Green", "Yellow", "Blue", "Purple", "Cyan", "White"];
const INITIALS: [char; 8] = ['K', 'R', 'G', 'Y', 'B', 'P', 'C', 'W'];

/// An additive light color: any combination of the red, green, and blue components.
///
/// Mixing is bitwise union, so it is commutative, associative, and idempotent.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LightColor(u8);

/// A color name that does not match any of the eight [`LightColor`]s.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown light color '{0}'")]
pub struct ParseColorError(pub String);

impl LightColor {
    /// No light at all.
    pub const NONE: Self = Self(0);
    /// The red component.
    pub const RED: Self = Self(1 << 0);
    /// The green component.
    pub const GREEN: Self = Self(1 << 1);
    /// The blue component.
    pub const BLUE: Self = Self(1 << 2);
    /// Red and green.
    pub const YELLOW: Self = Self(Self::RED.0 | Self::GREEN.0);
    /// Green and blue.
    pub const CYAN: Self = Self(Self::GREEN.0 | Self::BLUE.0);
    /// Red and blue.
    pub const PURPLE: Self = Self(Self::RED.0 | Self::BLUE.0);
    /// All three components.
    pub const WHITE: Self = Self(Self::RED.0 | Self::GREEN.0 | Self::BLUE.0);

    /// All eight colors, ordered by their bit value.
    pub const ALL: [Self; 8] = [
        Self::NONE, Self::RED, Self::GREEN, Self::YELLOW,
        Self::BLUE, Self::PURPLE, Self::CYAN, Self::WHITE,
    ];

    /// Returns [`None`] if `bits` has anything set above the blue component.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits <= Self::WHITE.0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// The raw component bits: red is bit 0, green bit 1, blue bit 2.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether no component is present.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Additively mix two colors.
    pub const fn mix(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every component of `component` is also present in `self`.
    ///
    /// `WHITE.contains(RED)` holds, `RED.contains(BLUE)` does not, and every color contains [`NONE`](Self::NONE).
    pub const fn contains(self, component: Self) -> bool {
        self.0 & component.0 == component.0
    }

    /// Exactly one of red, green, or blue.
    pub const fn is_primary(self) -> bool {
        self.0.count_ones() == 1
    }

    /// How many of red, green, and blue are present.
    pub const fn component_count(self) -> u32 {
        self.0.count_ones()
    }

    /// One-letter code, `K` for [`NONE`](Self::NONE).
    pub const fn initial(self) -> char {
        INITIALS[self.0 as usize]
    }
}

impl BitOr for LightColor {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.mix(rhs)
    }
}

impl BitOrAssign for LightColor {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.mix(rhs);
    }
}

impl FromIterator<LightColor> for LightColor {
    fn from_iter<T: IntoIterator<Item=LightColor>>(iter: T) -> Self {
        iter.into_iter().fold(Self::NONE, Self::mix)
    }
}

impl Display for LightColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", NAMES[self.0 as usize])
    }
}

impl FromStr for LightColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES.iter()
            .position(|name| name.eq_ignore_ascii_case(s.trim()))
            .map(|bits| Self(bits as u8))
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

impl TryFrom<String> for LightColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LightColor> for String {
    fn from(value: LightColor) -> Self {
        value.to_string()
    }
}
