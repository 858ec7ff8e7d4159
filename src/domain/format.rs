// ============================================================================
// Variant Format
// The closed set of representations a Variant can hold
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminant naming which primitive representation a Variant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Format {
    Bool,
    UInt8,
    SInt8,
    UInt16,
    SInt16,
    UInt32,
    SInt32,
    UInt64,
    SInt64,
    Float32,
    Float64,
    String,
}

/// Arithmetic family a numeric format belongs to.
///
/// Each family shares one 64-bit accumulator: `u64` for unsigned (including
/// `Bool`), `i64` for signed and `f64` for floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Unsigned,
    Signed,
    Float,
}

impl Format {
    /// Every format, in declaration order
    pub const ALL: [Format; 12] = [
        Format::Bool,
        Format::UInt8,
        Format::SInt8,
        Format::UInt16,
        Format::SInt16,
        Format::UInt32,
        Format::SInt32,
        Format::UInt64,
        Format::SInt64,
        Format::Float32,
        Format::Float64,
        Format::String,
    ];

    /// Arithmetic family, `None` for `String`.
    #[inline]
    pub const fn family(self) -> Option<Family> {
        match self {
            Format::Bool | Format::UInt8 | Format::UInt16 | Format::UInt32 | Format::UInt64 => {
                Some(Family::Unsigned)
            }
            Format::SInt8 | Format::SInt16 | Format::SInt32 | Format::SInt64 => {
                Some(Family::Signed)
            }
            Format::Float32 | Format::Float64 => Some(Family::Float),
            Format::String => None,
        }
    }

    /// Signed integer formats only; floats are neither signed nor unsigned.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self.family(), Some(Family::Signed))
    }

    /// Unsigned integer formats and `Bool`.
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(self.family(), Some(Family::Unsigned))
    }

    #[inline]
    pub const fn is_floating(self) -> bool {
        matches!(self.family(), Some(Family::Float))
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, Format::String)
    }

    /// Storage width in bits (`Bool` counts as 1, `String` as 0).
    pub const fn bits(self) -> u32 {
        match self {
            Format::Bool => 1,
            Format::UInt8 | Format::SInt8 => 8,
            Format::UInt16 | Format::SInt16 => 16,
            Format::UInt32 | Format::SInt32 | Format::Float32 => 32,
            Format::UInt64 | Format::SInt64 | Format::Float64 => 64,
            Format::String => 0,
        }
    }

    /// Same-width signed format for an unsigned one (`Bool` maps to `SInt8`).
    /// Other formats map to themselves.
    pub const fn signed_counterpart(self) -> Format {
        match self {
            Format::Bool | Format::UInt8 => Format::SInt8,
            Format::UInt16 => Format::SInt16,
            Format::UInt32 => Format::SInt32,
            Format::UInt64 => Format::SInt64,
            other => other,
        }
    }

    /// Next larger format with the same signedness, used by type promotion.
    pub const fn next_wider(self) -> Option<Format> {
        match self {
            Format::Bool => Some(Format::UInt8),
            Format::UInt8 => Some(Format::UInt16),
            Format::UInt16 => Some(Format::UInt32),
            Format::UInt32 => Some(Format::UInt64),
            Format::SInt8 => Some(Format::SInt16),
            Format::SInt16 => Some(Format::SInt32),
            Format::SInt32 => Some(Format::SInt64),
            _ => None,
        }
    }

    /// The wider of two formats (ties keep `self`).
    #[inline]
    pub fn wider(self, other: Format) -> Format {
        if other.bits() > self.bits() {
            other
        } else {
            self
        }
    }

    /// Inclusive integer range, `None` for floats and strings.
    pub const fn integer_bounds(self) -> Option<(i128, i128)> {
        match self {
            Format::Bool => Some((0, 1)),
            Format::UInt8 => Some((0, u8::MAX as i128)),
            Format::SInt8 => Some((i8::MIN as i128, i8::MAX as i128)),
            Format::UInt16 => Some((0, u16::MAX as i128)),
            Format::SInt16 => Some((i16::MIN as i128, i16::MAX as i128)),
            Format::UInt32 => Some((0, u32::MAX as i128)),
            Format::SInt32 => Some((i32::MIN as i128, i32::MAX as i128)),
            Format::UInt64 => Some((0, u64::MAX as i128)),
            Format::SInt64 => Some((i64::MIN as i128, i64::MAX as i128)),
            Format::Float32 | Format::Float64 | Format::String => None,
        }
    }

    /// Whether the exact integer `value` is representable in this format.
    #[inline]
    pub fn fits(self, value: i128) -> bool {
        self.integer_bounds()
            .is_some_and(|(lo, hi)| (lo..=hi).contains(&value))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Format::Bool => "Bool",
            Format::UInt8 => "UInt8",
            Format::SInt8 => "SInt8",
            Format::UInt16 => "UInt16",
            Format::SInt16 => "SInt16",
            Format::UInt32 => "UInt32",
            Format::SInt32 => "SInt32",
            Format::UInt64 => "UInt64",
            Format::SInt64 => "SInt64",
            Format::Float32 => "Float32",
            Format::Float64 => "Float64",
            Format::String => "String",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
