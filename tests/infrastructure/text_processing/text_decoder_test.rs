use docchat::infrastructure::text_processing::{TextDecoder, TextDecoderError};

#[test]
fn given_utf8_bytes_when_decoding_then_returns_same_text() {
    let decoder = TextDecoder::default();

    assert_eq!(decoder.decode("héllo wörld ✓".as_bytes()), "héllo wörld ✓");
}

#[test]
fn given_empty_bytes_when_decoding_then_returns_empty_string() {
    let decoder = TextDecoder::default();

    assert_eq!(decoder.decode(&[]), "");
}

#[test]
fn given_utf8_bom_when_decoding_then_bom_is_stripped() {
    let decoder = TextDecoder::default();

    assert_eq!(decoder.decode(b"\xEF\xBB\xBFhello"), "hello");
}

#[test]
fn given_utf16le_bom_when_decoding_then_uses_utf16() {
    let decoder = TextDecoder::default();

    assert_eq!(decoder.decode(&[0xFF, 0xFE, b'h', 0x00, b'i', 0x00]), "hi");
}

#[test]
fn given_gbk_bytes_when_decoding_then_falls_back_to_gbk() {
    let decoder = TextDecoder::default();

    assert_eq!(decoder.decode(&[0xC4, 0xE3, 0xBA, 0xC3]), "你好");
}

#[test]
fn given_byte_invalid_in_multibyte_encodings_when_decoding_then_single_byte_fallback_wins() {
    let decoder = TextDecoder::default();

    assert_eq!(decoder.decode(&[b'c', b'a', b'f', 0xFF]), "cafÿ");
}

#[test]
fn given_utf8_only_cascade_when_decoding_invalid_bytes_then_decodes_lossily() {
    let decoder = TextDecoder::new(["utf-8"]).unwrap();

    assert_eq!(decoder.decode(&[b'o', b'k', 0xFF]), "ok\u{FFFD}");
}

#[test]
fn given_empty_cascade_when_decoding_then_lossy_fallback_still_applies() {
    let decoder = TextDecoder::new(Vec::<String>::new()).unwrap();

    assert_eq!(decoder.decode(b"plain"), "plain");
}

#[test]
fn given_unknown_label_when_building_then_returns_error() {
    let result = TextDecoder::new(["utf-8", "klingon"]);

    assert!(matches!(result, Err(TextDecoderError::UnknownEncoding(label)) if label == "klingon"));
}

#[test]
fn given_label_aliases_when_building_then_resolves_canonical_names() {
    let decoder = TextDecoder::new(["UTF8", "latin1"]).unwrap();

    assert_eq!(decoder.encoding_names(), vec!["UTF-8", "windows-1252"]);
}

#[test]
fn given_default_cascade_when_inspecting_then_utf8_comes_first() {
    let decoder = TextDecoder::default();

    assert_eq!(decoder.encoding_names().first(), Some(&"UTF-8"));
}

#[test]
fn given_every_single_byte_and_pair_when_decoding_then_never_panics() {
    let decoders = [TextDecoder::default(), TextDecoder::new(["utf-8"]).unwrap()];

    for decoder in &decoders {
        for first in 0..=u8::MAX {
            decoder.decode(&[first]);
            for second in (0..=u8::MAX).step_by(7) {
                decoder.decode(&[first, second]);
            }
        }
    }
}

#[test]
fn given_pseudo_random_sequences_when_decoding_then_always_returns_text() {
    let decoder = TextDecoder::new(["utf-8"]).unwrap();
    let mut state: u32 = 0x2545_F491;

    for length in 0..200 {
        let bytes: Vec<u8> = (0..length)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state & 0xFF) as u8
            })
            .collect();

        let text = decoder.decode(&bytes);
        assert!(text.len() >= bytes.iter().filter(|b| b.is_ascii()).count());
    }
}
