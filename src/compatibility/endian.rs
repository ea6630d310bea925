use std::str::FromStr;
use crate::error::CodecError;

///
/// Byte order of a serialized integer.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Order of the target's in-memory integers, fixed at build time.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Network byte order.
    pub const NETWORK: Endian = Endian::Big;

    pub const fn is_native(self) -> bool {
        matches!(
            (self, Endian::NATIVE),
            (Endian::Big, Endian::Big) | (Endian::Little, Endian::Little)
        )
    }

    pub const fn reversed(self) -> Endian {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }

    ///
    /// Bit offset of the byte at `index` inside a `width`-byte integer.
    /// Big endian puts the most significant group at index 0.
    ///
    pub const fn shift(self, index: usize, width: usize) -> u32 {
        let group = match self {
            Endian::Big => width - 1 - index,
            Endian::Little => index,
        };
        (group * 8) as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endian::Big => "big",
            Endian::Little => "little",
        }
    }
}

impl Default for Endian {
    fn default() -> Self {
        Endian::NATIVE
    }
}

impl FromStr for Endian {
    type Err = CodecError;

    /// Accepts `big`, `little` and `native`, resolving the latter immediately.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(Endian::Big),
            "little" | "le" => Ok(Endian::Little),
            "native" | "ne" => Ok(Endian::NATIVE),
            _ => Err(CodecError::UnknownOrder(s.to_string())),
        }
    }
}
