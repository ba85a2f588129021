//! Voxel colors and `#RRGGBB` decoding.

use std::fmt;
use std::str::FromStr;

use crate::constants::OPAQUE_ALPHA;
use crate::error::{SvoError, SvoResult};

/// 8-bit-per-channel RGB color of a voxel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Rgb {
  pub const BLACK: Self = Self::new(0, 0, 0);
  pub const WHITE: Self = Self::new(255, 255, 255);

  #[inline]
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Parse a 7-character `#RRGGBB` string. Hex digits may be either case.
  pub fn from_hex(hex: &str) -> SvoResult<Self> {
    let malformed = || SvoError::MalformedColor(hex.to_owned());

    let digits = hex
      .strip_prefix('#')
      .filter(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
      .ok_or_else(malformed)?;

    let channel = |start: usize| u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| malformed());

    Ok(Self {
      r: channel(0)?,
      g: channel(2)?,
      b: channel(4)?,
    })
  }

  /// Texel bytes for this color, always fully opaque.
  #[inline]
  pub const fn to_rgba(self) -> [u8; 4] {
    [self.r, self.g, self.b, OPAQUE_ALPHA]
  }
}

impl FromStr for Rgb {
  type Err = SvoError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_hex(s)
  }
}

impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
  }
}

impl From<[u8; 3]> for Rgb {
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self::new(r, g, b)
  }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
