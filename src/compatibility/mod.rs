pub mod endian;
pub mod unified_endian;
pub mod bytes_endian;
