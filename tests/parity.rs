//! Differential outcome parity against a serde_json baseline.
//!
//! On strict JSON the two decoders must agree on accept-vs-reject. Value
//! comparison is out of scope here (the value models differ; exact values
//! are pinned by the unit corpus in `lib.rs`). The deliberate extensions
//! beyond strict JSON are asserted separately so drift in either direction
//! shows up.

use serde_json::Value as SerdeValue;
use sift_json::from_json;

fn serde_accepts(input: &str) -> bool {
    serde_json::from_str::<SerdeValue>(input).is_ok()
}

#[test]
fn valid_documents_accepted_by_both() {
    let corpus = [
        r#"{"a":1,"b":"ok"}"#,
        r#"[1,2,3,{"x":true}]"#,
        r#"{"nested":{"arr":[{"k":"v"}]}}"#,
        r#"{"unicode":"\u2603"}"#,
        "\t{\n\r\t }\r\n",
        "  [\n\t1,\t2 ] \t",
        "-3.14159",
        "\"\u{0191}\"",
    ];
    for input in corpus {
        assert!(from_json(input).is_ok(), "rejected valid input: {input:?}");
        assert!(serde_accepts(input), "baseline rejected: {input:?}");
    }
}

#[test]
fn malformed_documents_rejected_by_both() {
    let corpus = [
        "wegouhweg",
        "[\"abcdef]",
        "[\"a\",\"b\"",
        "{\"a:\"b\"}",
        "{\"a\":13",
        "{123: 456}",
        "[nulx]",
        "[trux]",
        "[12, ]",
        "[123",
        "[1, , ,]",
        "[1, , ",
        "[#",
        "[1, 2\n#",
        "{\"abc\"}",
        "{\"abc\"",
        "{\"abc\":",
        "{",
        "{,}",
        "[] []",
    ];
    for input in corpus {
        assert!(from_json(input).is_err(), "accepted bad input: {input:?}");
        assert!(!serde_accepts(input), "baseline accepted: {input:?}");
    }
}

#[test]
fn deliberate_extensions_beyond_strict_json() {
    // Accepted here, rejected by the strict baseline.
    let extensions = [".1", "-.1", "1.", r#""\x""#];
    for input in extensions {
        assert!(from_json(input).is_ok(), "should accept: {input:?}");
        assert!(!serde_accepts(input), "baseline accepts: {input:?}");
    }
}

#[test]
fn integers_past_u64_range_decode_exactly() {
    // The baseline keeps this as an imprecise f64 (or rejects, depending
    // on features); here it must be an exact arbitrary-precision integer.
    let input = "18446744073709551616";
    let value = from_json(input).unwrap().unwrap();
    assert_eq!(
        value,
        sift_json::Value::Int(input.parse().unwrap())
    );
}
