use quickcheck_macros::quickcheck;
use ws_codec::frame::{
    build_frame, len_code, parse_extension, parse_header, unmask_payload, Builder, SeededKeys,
};
use ws_codec::Opcode;

/// Decodes one frame the way a connection manager would: header, extension
/// sized from the header, payload slice, unmask.
fn decode(wire: &[u8]) -> (u8, Vec<u8>) {
    let header = parse_header(&wire[..2]).unwrap();
    let ext_end = 2 + header.extension_len();
    let ext = parse_extension(&wire[2..ext_end]);

    let len = header.short_len().or(ext.len).unwrap() as usize;
    let mut payload = wire[ext_end..ext_end + len].to_vec();
    assert_eq!(ext_end + len, wire.len());

    match ext.mask {
        Some(key) if !payload.is_empty() => {
            unmask_payload(&key, &mut payload).unwrap();
        }
        _ => {}
    }

    let mut first = u8::from(header.opcode);
    if header.fin {
        first |= 0x80;
    }
    (first, payload)
}

fn payload_of(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn unmasked_round_trip() {
    for &len in [0usize, 1, 125, 126, 65534, 65535, 65536].iter() {
        let payload = payload_of(len);
        let wire = build_frame(&payload, 0x82, false, SeededKeys::default());
        let (opcode, decoded) = decode(&wire);
        assert_eq!(opcode, 0x82, "len {}", len);
        assert_eq!(decoded, payload, "len {}", len);
    }
}

#[test]
fn masked_round_trip() {
    let mut keys = SeededKeys::default();
    for &len in [0usize, 1, 125, 126, 65534, 65535, 65536].iter() {
        let payload = payload_of(len);
        let wire = build_frame(&payload, 0x81, true, &mut keys);
        let (opcode, decoded) = decode(&wire);
        assert_eq!(opcode, 0x81, "len {}", len);
        assert_eq!(decoded, payload, "len {}", len);
    }
}

#[test]
fn length_code_selection() {
    for &(len, code, ext) in [(125usize, 125u8, 0usize), (126, 126, 2), (65535, 127, 8)].iter() {
        let wire = build_frame(&payload_of(len), 0x82, false, SeededKeys::default());
        let header = parse_header(&wire[..2]).unwrap();
        assert_eq!(header.len_code, code);
        assert_eq!(len_code(len), code);
        assert_eq!(header.extension_len(), ext);
        assert_eq!(wire.len(), 2 + ext + len);
    }
}

#[test]
fn twelve_byte_extension() {
    let wire = build_frame(&payload_of(70_000), 0x82, true, SeededKeys::default());
    let header = parse_header(&wire[..2]).unwrap();
    assert_eq!(header.extension_len(), 12);

    let ext = parse_extension(&wire[2..14]);
    assert_eq!(ext.len, Some(70_000));
    let mut key = [0; 4];
    key.copy_from_slice(&wire[10..14]);
    assert_eq!(ext.mask, Some(key));
}

#[test]
fn text_frame_header() {
    let header = parse_header(&[0x81, 0x05]).unwrap();
    assert!(header.fin);
    assert_eq!(header.opcode, Opcode::Text);
    assert_eq!(header.len_code, 5);
    assert!(!header.mask);
}

#[test]
fn builder_reports_missing_arguments() {
    let err = Builder::new().build(SeededKeys::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing frame argument `payload`, expected build(payload, opcode, mask)"
    );
}

#[quickcheck]
fn any_payload_round_trips(payload: Vec<u8>, opcode: u8, mask: bool, seed: u32) -> bool {
    let wire = build_frame(&payload, opcode, mask, SeededKeys::new(seed));
    let (first, decoded) = decode(&wire);
    // only FIN and the opcode nibble are reconstructed here
    first == opcode & 0x8f && decoded == payload
}
