//! Deterministic round-indexed color sequence.
//!
//! Round `n` maps to a [`Modifier`] (one coordinate per channel) and every
//! coordinate maps to an 8-bit intensity through binary subdivision of the
//! unit interval. Early rounds use a coarse palette (black, the primaries,
//! the secondaries, white); later rounds interleave finer gradations between
//! colors already shown, so early colors stay maximally separated no matter
//! how far the sequence is extended.
//!
//! The sequence is organised in tiers. Tier `r` holds `3r² + 3r + 1` slots,
//! so tiers `0..=R` hold exactly `(R + 1)³` slots and the tier of slot `n` is
//! the integer cube root of `n`.

use std::fmt;

use serde::{Serialize, Serializer};

/// A color channel, also used as the position of the odd coordinate in a
/// tier slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    fn from_offset(offset: u64) -> Self {
        match offset % 3 {
            0 => Channel::Red,
            1 => Channel::Green,
            _ => Channel::Blue,
        }
    }
}

/// Channel coordinates of a color before intensity scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Modifier {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }
}

/// Kind of slot inside a tier, in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// One channel at the tier reference, the other two at `left`/`right`.
    Single { left: u32, right: u32, pos: Channel },
    /// Two channels at the tier reference, the channel at `pos` at `other`.
    Double { other: u32, pos: Channel },
    /// All three channels at the tier reference.
    Triple,
}

/// Position of a round index in the tier enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSlot {
    pub reference: u32,
    pub slot: Slot,
}

impl TierSlot {
    pub fn modifier(self) -> Modifier {
        let r = self.reference;
        match self.slot {
            Slot::Single { left, right, pos } => match pos {
                Channel::Red => Modifier::new(r, left, right),
                Channel::Green => Modifier::new(left, r, right),
                Channel::Blue => Modifier::new(left, right, r),
            },
            Slot::Double { other, pos } => match pos {
                Channel::Red => Modifier::new(other, r, r),
                Channel::Green => Modifier::new(r, other, r),
                Channel::Blue => Modifier::new(r, r, other),
            },
            Slot::Triple => Modifier::new(r, r, r),
        }
    }
}

/// Number of slots in tier `reference`.
pub fn tier_len(reference: u32) -> u64 {
    let r = u64::from(reference);
    3 * r * r + 3 * r + 1
}

fn cube(r: u64) -> Option<u64> {
    r.checked_mul(r)?.checked_mul(r)
}

/// Largest `r` with `r³ <= n`.
fn integer_cbrt(n: u64) -> u64 {
    // The float estimate can miss by one next to perfect cubes.
    let mut r = (n as f64).cbrt() as u64;
    while cube(r).map_or(true, |c| c > n) {
        r -= 1;
    }
    while cube(r + 1).is_some_and(|c| c <= n) {
        r += 1;
    }
    r
}

/// Locate slot `n` of the tier enumeration.
pub fn locate(n: u64) -> TierSlot {
    let root = integer_cbrt(n);
    // root <= cbrt(u64::MAX) < 2^22
    let reference = root as u32;
    if reference == 0 {
        return TierSlot {
            reference,
            slot: Slot::Triple,
        };
    }

    let mut offset = n - root * root * root;
    let singles = 3 * root * root;
    if offset < singles {
        let slot = Slot::Single {
            left: (offset / (3 * root)) as u32,
            right: ((offset / 3) % root) as u32,
            pos: Channel::from_offset(offset),
        };
        return TierSlot { reference, slot };
    }

    offset -= singles;
    let slot = if offset < 3 * root {
        Slot::Double {
            other: (offset / 3) as u32,
            pos: Channel::from_offset(offset),
        }
    } else {
        Slot::Triple
    };
    TierSlot { reference, slot }
}

/// Channel coordinates for round `n`.
pub fn number_modifier(n: u64) -> Modifier {
    locate(n).modifier()
}

/// Fraction `dividend / divisor` of full intensity; `divisor` is a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DyadicFraction {
    pub dividend: u64,
    pub divisor: u64,
}

impl DyadicFraction {
    /// Scale to an 8-bit intensity, rounding halves up.
    pub fn intensity(self) -> u8 {
        let scaled = (510 * self.dividend + self.divisor) / (2 * self.divisor);
        u8::try_from(scaled).unwrap_or(u8::MAX)
    }
}

/// Binary subdivision of the unit interval: `0/1, 1/1, 1/2, 1/4, 3/4, 1/8, …`.
///
/// Coordinate `m >= 2` lands on the odd numerators of denominator
/// `2^⌈log2 m⌉`, visited left to right.
pub fn subdivide(m: u32) -> DyadicFraction {
    match m {
        0 => DyadicFraction {
            dividend: 0,
            divisor: 1,
        },
        1 => DyadicFraction {
            dividend: 1,
            divisor: 1,
        },
        _ => {
            let m = u64::from(m);
            let divisor = m.next_power_of_two();
            DyadicFraction {
                dividend: 2 * (m - divisor / 2 - 1) + 1,
                divisor,
            }
        }
    }
}

/// A 24-bit color, displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn modifier_color(modifier: Modifier) -> Rgb {
    Rgb {
        red: subdivide(modifier.red).intensity(),
        green: subdivide(modifier.green).intensity(),
        blue: subdivide(modifier.blue).intensity(),
    }
}

/// Color shown for round `n`.
pub fn color_for(n: u64) -> Rgb {
    modifier_color(number_modifier(n))
}
