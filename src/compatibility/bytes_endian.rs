use log::trace;
use crate::compatibility::endian::Endian;
use crate::compatibility::unified_endian::UnifiedEndian;
use crate::error::CodecError;

///
/// Decodes a `T` from a slice that must hold exactly `T::WIDTH` bytes.
/// Shorter or longer input is rejected, never truncated or padded.
///
pub fn decode_slice<T, const SIZE: usize>(bytes: &[u8], order: Endian) -> Result<T, CodecError>
where
    T: UnifiedEndian<SIZE>,
{
    let array: [u8; SIZE] = bytes.try_into().map_err(|_| {
        trace!("Rejected {} bytes for a {}-byte {} endian decode.", bytes.len(), SIZE, order.name());
        CodecError::LengthMismatch { expected: SIZE, actual: bytes.len() }
    })?;
    Ok(T::from_endian_bytes(array, order))
}

///
/// Writes `value` into `out`, which must be exactly `T::WIDTH` bytes long.
/// `out` is left untouched on failure.
///
pub fn encode_into<T, const SIZE: usize>(value: T, order: Endian, out: &mut [u8]) -> Result<(), CodecError>
where
    T: UnifiedEndian<SIZE>,
{
    if out.len() != SIZE {
        trace!("Rejected {}-byte buffer for a {}-byte {} endian encode.", out.len(), SIZE, order.name());
        return Err(CodecError::LengthMismatch { expected: SIZE, actual: out.len() });
    }
    out.copy_from_slice(&value.to_endian_bytes(order));
    Ok(())
}
