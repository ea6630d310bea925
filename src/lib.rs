pub mod compatibility;
pub mod error;
pub mod lib_util;

pub use compatibility::bytes_endian::{decode_slice, encode_into};
pub use compatibility::endian::Endian;
pub use compatibility::unified_endian::{decode, decode_native, encode, encode_native, UnifiedEndian};
pub use error::CodecError;
