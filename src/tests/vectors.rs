use crate::{compress, compress_utf16, decompress, decompress_utf16, DecompressError};

const PARAGRAPH: &str = concat!(
    "During tattooing, ink is injected into the skin, initiating an immune ",
    "response, and cells called \"macrophages\" move into the area and \"eat ",
    "up\" the ink. The macrophages carry some of the ink to the body's lymph ",
    "nodes, but some that are filled with ink stay put, embedded in the ",
    "skin. That's what makes the tattoo visible under the skin. Dalhousie ",
    "University's Alec Falkenham is developing a topical cream that works by ",
    "targeting the macrophages that have remained at the site of the tattoo. ",
    "New macrophages move in to consume the previously pigment-filled ",
    "macrophages and then migrate to the lymph nodes, eventually taking all ",
    "the dye with them. \"When comparing it to laser-based tattoo removal, ",
    "in which you see the burns, the scarring, the blisters, in this case, ",
    "we've designed a drug that doesn't really have much off-target ",
    "effect,\" he said. \"We're not targeting any of the normal skin cells, ",
    "so you won't see a lot of inflammation. In fact, based on the process ",
    "that we're actually using, we don't think there will be any ",
    "inflammation at all and it would actually be anti-inflammatory.\"",
);

const PARAGRAPH_COMPRESSED: &str = concat!(
    "CIVwTglgdg5gBAFwIYIQezdGAaO0DWeAznlAFYCmAxghQCanqIAWFcR+0u0ECEKW",
    "OEih4AtqJBQ2YCkQAOaKEQq5hDKhQA2mklSTb6cAESikVMGjnMkMWUbii0ANzbQm",
    "CVkJlIhUBkYoUOBA5ew9XKHwAOjgAFU9Tc0trW10kMDAAT3Y0UTY0ADMWCMJ3TwA",
    "jNDpMgHISTUzRKzgoKtlccpAEHLyWIPS2AogDBgB3XmZSQiJkbLku3ApRcvo6Q2h",
    "i9k4oGPiUOrhR627TfFlN5FQMOCcIIghyzTZJNbBNjmgY4H1mNBB7tgAVSgEBcYH",
    "uCFqJAAgk8qHAAGL6M5QayiYhwNYuTSWQQ+dByCB6TRwcyBdEeIKjNBgfAkcrZZB",
    "gWx8WCbRIWKw2c6U7rWFxwGSmaCGILhdi8fJFcWXdBoGIAOQoowcZk5KXOjgFGyY",
    "VEURBAvXFchktz+RAacEJMDyUAQAFohiNVUkualfAxwiJRBAYGAUGwymwGk1Jq01",
    "kRFi47SB9JbkNt4HHNtU2OMPMVRDEjAB1VgiPVNdKCXiINBwTRIZRge3lKuGWXXI",
    "XOfTcERHImTTJ-dgUQMVcBKXDioh6DJYYcVTR3WjgtssO6k+u4UYUGoCiO+qQMHx",
    "0MAgeC8zFoWRQGrdbzabL8tgSKiTQoFe1MllwCgFArUBDYeyeIhICA6GzHM1xkFo",
    "0G6F8KFZJMoGyQpNlaMBTBJD4Cy0HRcCIctuxAQ5FHPXs2B8HFugQ6ACkrcQBEUG",
    "IAEkRAKMxvzgOtlAYRRNhNNANCIEgj1XGowOY2Mr2Ce5YBXNg6AIyDmAIYowPGbR",
    "WOIuDSEopBqL4Tj+hUtQ8G6akQE0HcaFEy0Vl8Ph7QoqjTHQLIoiMIA",
);

/// Every permutation of `symbols` in Heap's order, joined by spaces.
fn permutations(symbols: &[char]) -> String {
    let mut state = symbols.to_vec();
    let mut counters = vec![0usize; state.len()];
    let mut result: String = state.iter().collect();

    let mut j = 1;
    while j < state.len() {
        if counters[j] < j {
            let k = if j % 2 == 0 { 0 } else { counters[j] };
            state.swap(j, k);
            counters[j] += 1;
            j = 1;
            result.push(' ');
            result.extend(state.iter());
        } else {
            counters[j] = 0;
            j += 1;
        }
    }

    result
}

/// `count` pseudo-random decimal fractions, each followed by a space.
fn random_numbers(count: usize) -> String {
    let mut seed = 12345u64;
    let mut result = String::new();

    for _ in 0..count {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        result.push_str(&format!("0.{} ", seed >> 11));
    }
    result
}

fn assert_roundtrip(text: &str) -> String {
    let compressed = compress(text);
    assert_eq!(decompress(&compressed).unwrap(), text);
    compressed
}

#[test]
fn test_hello_world() {
    let compressed = assert_roundtrip("Hello world!");
    assert_eq!(compressed, "BIUwNmD2AEDukCcwBMCEQ");
    assert_ne!(compressed, "Hello world!");
}

#[test]
fn test_empty_string() {
    let compressed = assert_roundtrip("");
    assert_eq!(compressed, "Q");
}

#[test]
fn test_empty_input_rejected() {
    let err = decompress("").unwrap_err();
    assert!(matches!(err, DecompressError::EmptyInput));
    assert!(err.is_invalid_input());
}

#[test]
fn test_foreign_characters_rejected() {
    for input in ["=", "BIUwNmD2AEDukCcwBMCEQ=", "a/b", "Q Q"] {
        let err = decompress(input).unwrap_err();
        assert!(err.is_invalid_input(), "{input:?} gave {err}");
    }
}

#[test]
fn test_repeating_string_shrinks() {
    let text = "aaaaabaaaaacaaaaadaaaaaeaaaaa";
    let compressed = assert_roundtrip(text);
    assert_eq!(compressed, "IYkI1EGNOATWBTWQ");
    assert!(compressed.len() < text.len());
}

#[test]
fn test_binary_compatibility() {
    let compressed = assert_roundtrip(PARAGRAPH);
    assert_eq!(compressed, PARAGRAPH_COMPRESSED);
}

#[test]
fn test_truncated_paragraph() {
    let half = &PARAGRAPH_COMPRESSED[..PARAGRAPH_COMPRESSED.len() / 2];
    let err = decompress(half).unwrap_err();
    assert!(matches!(err, DecompressError::Truncated { .. }));
    assert!(!err.is_invalid_input());
}

#[test]
fn test_all_code_units() {
    // One of every unit in order cannot shrink; only the roundtrip is checked.
    let units: Vec<u16> = (0..=u16::MAX).collect();
    let compressed = compress_utf16(&units);
    assert_eq!(decompress_utf16(&compressed).unwrap(), units);
}

#[test]
fn test_all_code_units_are_url_safe() {
    let mut units: Vec<u16> = (0..=u16::MAX).collect();
    units.extend(random_numbers(1000).encode_utf16());

    let compressed = compress_utf16(&units);
    assert!(!compressed.contains('='));
    assert!(!compressed.contains('/'));
    assert_eq!(decompress_utf16(&compressed).unwrap(), units);
}

#[test]
fn test_small_permutations() {
    let symbols = ['0', '1', '2', '3', '4', '5', '6', '7'];
    for n in 0..=symbols.len() {
        assert_roundtrip(&permutations(&symbols[..n]));
    }
}

#[test]
fn test_permutations_of_nine() {
    let text = permutations(&['0', '1', '2', '3', '4', '5', '6', '7', '8']);
    assert_eq!(text.len(), 362_880 * 10 - 1);

    let compressed = assert_roundtrip(&text);
    assert!(compressed.len() < text.len());
}

#[test]
fn test_permutation_generator() {
    assert_eq!(permutations(&[]), "");
    assert_eq!(permutations(&['0', '1']), "01 10");
    assert_eq!(permutations(&['0', '1', '2']), "012 102 201 021 120 210");
}
