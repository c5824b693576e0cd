#![no_main]
use libfuzzer_sys::fuzz_target;
use xkbmon::{Decoded, LABEL_CAPACITY, MAX_LABEL_CHARS, ValidScalars, build_short_label, decode};

fn check_decode(data: &[u8]) {
    match decode(data) {
        Decoded::Scalar { ch, len } => {
            let len = usize::from(len);
            let mut buf = [0_u8; 4];
            assert_eq!(
                core::str::from_utf8(&data[..len]).ok(),
                Some(&*ch.encode_utf8(&mut buf)),
                "decode accepted bytes the validator rejects"
            );
        }
        Decoded::Incomplete => {
            if let Err(err) = core::str::from_utf8(data) {
                assert_eq!(err.valid_up_to(), 0);
                assert_eq!(err.error_len(), None);
            }
        }
        Decoded::Invalid { skip } => {
            assert!(skip >= 1 && skip <= data.len());
            let err = core::str::from_utf8(data).expect_err("decode rejected valid bytes");
            assert_eq!(err.valid_up_to(), 0);
        }
    }
}

fn check_label(data: &[u8]) {
    let label = build_short_label(data);
    let with_nul = label.as_bytes_with_nul();
    assert!(with_nul.len() <= LABEL_CAPACITY);
    assert_eq!(with_nul.last(), Some(&0));
    assert!(core::str::from_utf8(label.as_bytes()).is_ok());

    let before_nul = data.split(|&b| b == 0).next().unwrap_or_default();
    let expected: String = ValidScalars::new(before_nul)
        .take(MAX_LABEL_CHARS)
        .map(|(ch, _)| ch)
        .collect();
    assert_eq!(label.as_str(), expected);
    assert_eq!(build_short_label(data), label);
}

fuzz_target!(|data: &[u8]| {
    check_decode(data);
    check_label(data);
});
