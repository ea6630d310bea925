use crate::compatibility::endian::Endian;

mod sealed {
    pub trait Sealed {}
}

///
/// Fixed-width integers that convert to and from exactly `SIZE` bytes.
/// Implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64` and `u64` only.
///
pub trait UnifiedEndian<const SIZE: usize>: sealed::Sealed + Copy + Sized {
    const WIDTH: usize = SIZE;

    fn to_endian_bytes(&self, order: Endian) -> [u8; SIZE];
    fn from_endian_bytes(bytes: [u8; SIZE], order: Endian) -> Self;

    fn to_bytes(&self) -> [u8; SIZE] {
        self.to_endian_bytes(Endian::NATIVE)
    }

    fn from_bytes(bytes: [u8; SIZE]) -> Self {
        Self::from_endian_bytes(bytes, Endian::NATIVE)
    }
}

// $u is the unsigned kind of the same width. Bytes are widened to $u before
// any shift and the signed reinterpretation happens once, on the final bits.
macro_rules! impl_unified_endian {
    ($($t:ty => $u:ty, $size:literal, $encode:ident, $decode:ident);* $(;)?) => {
        $(
            pub const fn $encode(value: $t, order: Endian) -> [u8; $size] {
                let bits = value as $u;
                let mut bytes = [0u8; $size];
                let mut i = 0;
                while i < $size {
                    bytes[i] = (bits >> order.shift(i, $size)) as u8;
                    i += 1;
                }
                bytes
            }

            pub const fn $decode(bytes: [u8; $size], order: Endian) -> $t {
                let mut bits: $u = 0;
                let mut i = 0;
                while i < $size {
                    bits |= (bytes[i] as $u) << order.shift(i, $size);
                    i += 1;
                }
                bits as $t
            }

            impl sealed::Sealed for $t {}

            impl UnifiedEndian<$size> for $t {
                fn to_endian_bytes(&self, order: Endian) -> [u8; $size] {
                    $encode(*self, order)
                }

                fn from_endian_bytes(bytes: [u8; $size], order: Endian) -> Self {
                    $decode(bytes, order)
                }
            }
        )*
    };
}

impl_unified_endian!(
    i8 => u8, 1, encode_i8, decode_i8;
    u8 => u8, 1, encode_u8, decode_u8;
    i16 => u16, 2, encode_i16, decode_i16;
    u16 => u16, 2, encode_u16, decode_u16;
    i32 => u32, 4, encode_i32, decode_i32;
    u32 => u32, 4, encode_u32, decode_u32;
    i64 => u64, 8, encode_i64, decode_i64;
    u64 => u64, 8, encode_u64, decode_u64;
);

pub fn encode<T, const SIZE: usize>(value: T, order: Endian) -> [u8; SIZE]
where
    T: UnifiedEndian<SIZE>,
{
    value.to_endian_bytes(order)
}

pub fn decode<T, const SIZE: usize>(bytes: [u8; SIZE], order: Endian) -> T
where
    T: UnifiedEndian<SIZE>,
{
    T::from_endian_bytes(bytes, order)
}

/// Same as `encode(value, Endian::NATIVE)`.
pub fn encode_native<T, const SIZE: usize>(value: T) -> [u8; SIZE]
where
    T: UnifiedEndian<SIZE>,
{
    value.to_bytes()
}

/// Same as `decode(bytes, Endian::NATIVE)`.
pub fn decode_native<T, const SIZE: usize>(bytes: [u8; SIZE]) -> T
where
    T: UnifiedEndian<SIZE>,
{
    T::from_bytes(bytes)
}
