use fixbin::{decode_slice, encode_into, CodecError, Endian};

#[test]
fn test_decode_slice() {
    let frame: Vec<u8> = vec![0x12, 0x34, 0x56, 0x78, 0x9a];

    let v: u32 = decode_slice(&frame[0..4], Endian::Big).unwrap();
    assert_eq!(v, 0x12345678);
    let v: i16 = decode_slice(&frame[3..5], Endian::Little).unwrap();
    assert_eq!(v, i16::from_le_bytes([0x78, 0x9a]));
    let v: u8 = decode_slice(&frame[4..], Endian::Big).unwrap();
    assert_eq!(v, 0x9a);
}

#[test]
fn test_decode_slice_rejects_wrong_length() {
    let frame = [0u8; 9];

    let short: Result<u64, CodecError> = decode_slice(&frame[..7], Endian::Big);
    assert_eq!(short, Err(CodecError::LengthMismatch { expected: 8, actual: 7 }));

    let long: Result<u64, CodecError> = decode_slice(&frame, Endian::Big);
    assert_eq!(long, Err(CodecError::LengthMismatch { expected: 8, actual: 9 }));

    let empty: Result<i8, CodecError> = decode_slice(&[], Endian::Little);
    assert_eq!(empty, Err(CodecError::LengthMismatch { expected: 1, actual: 0 }));
}

#[test]
fn test_encode_into() {
    let mut frame = [0u8; 6];
    encode_into(0x0102u16, Endian::Big, &mut frame[0..2]).unwrap();
    encode_into(-2i32, Endian::Little, &mut frame[2..6]).unwrap();
    assert_eq!(frame, [0x01, 0x02, 0xfe, 0xff, 0xff, 0xff]);
}

#[test]
fn test_encode_into_leaves_buffer_on_failure() {
    let mut frame = [0xaau8; 3];
    let result = encode_into(0u32, Endian::Big, &mut frame);
    assert_eq!(result, Err(CodecError::LengthMismatch { expected: 4, actual: 3 }));
    assert_eq!(frame, [0xaa; 3]);
}

#[test]
fn test_error_display() {
    let e = CodecError::LengthMismatch { expected: 4, actual: 2 };
    assert_eq!(e.to_string(), "Length mismatch (expected 4 bytes, got 2).");
    assert_eq!(format!("{:?}", e), "CodecError::Length mismatch (expected 4 bytes, got 2).");
}
