//! Tests for header encoding, frame-size validation and payload slicing.

use rstest::rstest;

use crate::frame::*;

#[rstest]
#[case(FrameSize::Bytes32, [0x20, 0x00])]
#[case(FrameSize::Bytes64, [0x40, 0x00])]
#[case(FrameSize::Bytes128, [0x80, 0x00])]
#[case(FrameSize::Bytes256, [0x00, 0x01])]
#[case(FrameSize::Bytes512, [0x00, 0x02])]
#[case(FrameSize::Bytes1024, [0x00, 0x04])]
fn encode_header_writes_size_little_endian(#[case] size: FrameSize, #[case] size_bytes: [u8; 2]) {
    let encoded = encode_header(FrameIndex::new(7), 9, size);
    assert_eq!(encoded, [7, 9, size_bytes[0], size_bytes[1]]);
}

#[test]
fn decode_header_reads_all_fields() {
    let (index, total, size) = decode_header(&[3, 200, 0x00, 0x01]).expect("valid header");
    assert_eq!(index, FrameIndex::new(3));
    assert_eq!(total, 200);
    assert_eq!(size, FrameSize::Bytes256);
}

#[rstest]
#[case(&[])]
#[case(&[1])]
#[case(&[1, 2, 64])]
fn decode_header_rejects_short_input(#[case] bytes: &[u8]) {
    let err = decode_header(bytes).expect_err("short header must be rejected");
    assert_eq!(err, FrameError::MalformedHeader { len: bytes.len() });
}

#[rstest]
#[case(0)]
#[case(100)]
#[case(33)]
#[case(2048)]
fn decode_header_rejects_unknown_frame_size(#[case] raw: u16) {
    let [lo, hi] = raw.to_le_bytes();
    let err = decode_header(&[0, 1, lo, hi]).expect_err("size outside the set must be rejected");
    assert_eq!(err, FrameError::InvalidFrameSize { found: raw });
}

#[test]
fn header_round_trips_through_wire_form() {
    let header = FrameHeader::new(FrameIndex::new(254), 255, FrameSize::Bytes1024);
    assert_eq!(FrameHeader::decode(&header.encode()), Ok(header));
}

#[test]
fn frame_size_parses_from_text() {
    assert_eq!("512".parse::<FrameSize>(), Ok(FrameSize::Bytes512));
    assert_eq!(" 1024\n".parse::<FrameSize>(), Ok(FrameSize::Bytes1024));
    assert_eq!(FrameSize::Bytes128.to_string(), "128");
}

#[rstest]
#[case("100", ParseFrameSizeError::Unsupported { found: 100 })]
#[case("70000", ParseFrameSizeError::Unsupported { found: 70_000 })]
#[case("abc", ParseFrameSizeError::NotANumber { input: "abc".to_owned() })]
#[case("-64", ParseFrameSizeError::NotANumber { input: "-64".to_owned() })]
fn frame_size_parse_error_names_input(#[case] text: &str, #[case] expected: ParseFrameSizeError) {
    assert_eq!(text.parse::<FrameSize>(), Err(expected));
}

#[test]
fn frame_size_capacity_and_ceiling() {
    assert_eq!(FrameSize::Bytes32.payload_capacity(), 28);
    assert_eq!(FrameSize::Bytes1024.max_input_len(), 255 * 1020);
}

#[test]
fn slice_frame_payload_tolerates_truncated_final_frame() {
    let wire = [0_u8, 1, 64, 0, 1, 2, 3];
    assert_eq!(slice_frame_payload(&wire, FrameSize::Bytes64), &[1, 2, 3]);
}

#[test]
fn slice_frame_payload_drops_bytes_past_capacity() {
    let mut wire = vec![0_u8, 1, 32, 0];
    wire.extend(0_u8..40);
    let payload = slice_frame_payload(&wire, FrameSize::Bytes32);
    assert_eq!(payload.len(), 28);
    assert_eq!(payload.last(), Some(&27));
}

#[test]
fn frame_decode_keeps_exact_capacity_payload() {
    let mut wire = vec![0_u8, 1, 32, 0];
    wire.extend(std::iter::repeat_n(5_u8, 28));
    let frame = Frame::decode(&wire).expect("full frame");
    assert_eq!(frame.payload().len(), 28);
    assert_eq!(frame.encode(), wire);
}

#[test]
fn frame_new_rejects_oversized_payload() {
    let header = FrameHeader::new(FrameIndex::zero(), 1, FrameSize::Bytes32);
    let err = Frame::new(header, vec![0; 29]).expect_err("payload beyond capacity");
    assert_eq!(
        err,
        FrameError::PayloadTooLong {
            len: 29,
            capacity: 28
        }
    );
}

#[test]
fn frame_decode_rejects_invalid_size_field() {
    let [lo, hi] = 100_u16.to_le_bytes();
    let err = Frame::decode(&[0, 1, lo, hi, 9, 9]).expect_err("size 100 is not valid");
    assert_eq!(err, FrameError::InvalidFrameSize { found: 100 });
}
