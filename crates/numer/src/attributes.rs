//! Per-number attributes: compatible numbers, gems, colours and planets.
//!
//! Lookups accept any value; anything outside 1-9 (including masters) is
//! first collapsed with [`MasterPolicy::Collapse`].

use core::fmt;

use crate::core::reduce::{reduce, MasterPolicy};

/// Ruling planet of a number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Planet {
    /// 1
    Sun,
    /// 2
    Moon,
    /// 3
    Jupiter,
    /// 4
    Rahu,
    /// 5
    Mercury,
    /// 6
    Venus,
    /// 7
    Ketu,
    /// 8
    Saturn,
    /// 9
    Mars,
}

impl Planet {
    /// Returns the planet name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Jupiter => "Jupiter",
            Self::Rahu => "Rahu",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Ketu => "Ketu",
            Self::Saturn => "Saturn",
            Self::Mars => "Mars",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed attributes of one number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberAttributes {
    /// Most compatible numbers.
    pub excellent: &'static [u32],
    /// Supportive numbers.
    pub good: &'static [u32],
    /// Neutral numbers.
    pub neutral: &'static [u32],
    /// Challenging numbers.
    pub bad: &'static [u32],
    /// Primary gemstone.
    pub gem: &'static str,
    /// Alternative gemstone, if any.
    pub gem_alternative: Option<&'static str>,
    /// Favourable colours.
    pub colors: &'static str,
    /// Ruling planet.
    pub planet: Planet,
}

/// Attributes of 1-9, indexed by `number - 1`.
pub static NUMBER_ATTRIBUTES: [NumberAttributes; 9] = [
    NumberAttributes {
        excellent: &[1, 4],
        good: &[5, 9, 3],
        neutral: &[2, 6],
        bad: &[7, 8],
        gem: "Ruby",
        gem_alternative: Some("Suryakanthika (Star Ruby)"),
        colors: "Orange, White",
        planet: Planet::Sun,
    },
    NumberAttributes {
        excellent: &[7, 5],
        good: &[2, 6, 4],
        neutral: &[1, 3],
        bad: &[9, 8],
        gem: "Pearl",
        gem_alternative: Some("Chandrakanthika (Moon Stone)"),
        colors: "White, Grey",
        planet: Planet::Moon,
    },
    NumberAttributes {
        excellent: &[1, 9],
        good: &[3, 5],
        neutral: &[2, 4, 7],
        bad: &[6, 8],
        gem: "Yellow Sapphire",
        gem_alternative: Some("Amethyst"),
        colors: "Yellow, Turquoise, Light Blue",
        planet: Planet::Jupiter,
    },
    NumberAttributes {
        excellent: &[1],
        good: &[5, 6],
        neutral: &[2, 3, 9],
        bad: &[4, 7, 8],
        gem: "Gomedhikam (Hessonite)",
        gem_alternative: Some("Opal"),
        colors: "Mixed Colours",
        planet: Planet::Rahu,
    },
    NumberAttributes {
        excellent: &[4, 5],
        good: &[1, 2, 3, 6, 7, 8, 9],
        neutral: &[],
        bad: &[],
        gem: "Emerald",
        gem_alternative: None,
        colors: "Light Green, Avoid all dark colours",
        planet: Planet::Mercury,
    },
    NumberAttributes {
        excellent: &[5],
        good: &[6, 9],
        neutral: &[2, 3, 4],
        bad: &[1, 7, 8],
        gem: "Diamond",
        gem_alternative: Some("American Diamond"),
        colors: "Pink",
        planet: Planet::Venus,
    },
    NumberAttributes {
        excellent: &[2],
        good: &[5],
        neutral: &[1, 3, 4, 6, 7],
        bad: &[8, 9],
        gem: "Cats Eye",
        gem_alternative: None,
        colors: "All Colours",
        planet: Planet::Ketu,
    },
    NumberAttributes {
        excellent: &[5],
        good: &[1],
        neutral: &[2, 3, 6, 9],
        bad: &[8, 4, 7],
        gem: "Blue Sapphire",
        gem_alternative: None,
        colors: "Dark Blue, Royal Blue, Light Black",
        planet: Planet::Saturn,
    },
    NumberAttributes {
        excellent: &[1, 3],
        good: &[5, 6, 9],
        neutral: &[4],
        bad: &[2, 8, 7],
        gem: "Coral",
        gem_alternative: None,
        colors: "Brown, Red",
        planet: Planet::Mars,
    },
];

/// Value used for attribute lookup: `number` itself if 1-9, otherwise
/// collapsed to a single digit.
#[must_use]
pub const fn lookup_number(number: u32) -> u32 {
    match number {
        1..=9 => number,
        _ => reduce(number, MasterPolicy::Collapse),
    }
}

/// Attributes of `number` after [`lookup_number`]; `None` for 0.
///
/// ```
/// use numer::attributes::{attributes, Planet};
///
/// assert_eq!(attributes(1).unwrap().gem, "Ruby");
/// assert_eq!(attributes(11).unwrap().planet, Planet::Moon); // 11 → 2
/// assert!(attributes(0).is_none());
/// ```
#[must_use]
pub fn attributes(number: u32) -> Option<&'static NumberAttributes> {
    match lookup_number(number) {
        0 => None,
        n => NUMBER_ATTRIBUTES.get((n - 1) as usize),
    }
}

/// Which derived number an attribute row describes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttributeKind {
    /// Chaldean name number.
    NameSignature,
    /// Apex of the name pyramid.
    PyramidApex,
    /// Destiny (life path) number.
    Destiny,
    /// Ruling (day) number.
    Ruling,
}

impl AttributeKind {
    /// Row label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NameSignature => "Name Signature Number",
            Self::PyramidApex => "Pyramid Apex Number",
            Self::Destiny => "Destiny Number",
            Self::Ruling => "Ruling Number",
        }
    }
}

/// One derived number with its attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeRow {
    /// Which number this is.
    pub kind: AttributeKind,
    /// The number as computed (may be a master).
    pub value: u32,
    /// The 1-9 value used for the lookup.
    pub lookup: u32,
    /// Attributes, if `lookup` is 1-9.
    pub attributes: Option<&'static NumberAttributes>,
}

impl AttributeRow {
    /// Looks up `value` for `kind`.
    #[must_use]
    pub fn new(kind: AttributeKind, value: u32) -> Self {
        Self {
            kind,
            value,
            lookup: lookup_number(value),
            attributes: attributes(value),
        }
    }
}

/// Attribute rows for the four headline numbers, in display order.
#[must_use]
pub fn attribute_rows(
    name_number: u32,
    pyramid_apex: Option<u32>,
    destiny: u32,
    ruling: u32,
) -> Vec<AttributeRow> {
    vec![
        AttributeRow::new(AttributeKind::NameSignature, name_number),
        AttributeRow::new(AttributeKind::PyramidApex, pyramid_apex.unwrap_or(0)),
        AttributeRow::new(AttributeKind::Destiny, destiny),
        AttributeRow::new(AttributeKind::Ruling, ruling),
    ]
}
