use crate::*;

// -------------------- Helpers --------------------

fn props(pairs: &[(&str, &str)]) -> Properties {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// -------------------- Decode --------------------

#[test]
fn decode_basic_entries() {
    let decoded = decode(b"foo = bar\nbaz=2\nname = continue").unwrap();
    assert_eq!(
        decoded,
        props(&[("foo", "bar"), ("baz", "2"), ("name", "continue")])
    );
}

#[test]
fn decode_trims_line_key_and_value() {
    let decoded = decode(b"   key   =   value   ").unwrap();
    assert_eq!(decoded, props(&[("key", "value")]));
}

#[test]
fn decode_handles_crlf_and_tabs() {
    let decoded = decode(b"a = 1\r\n\tb\t=\t2\r\n").unwrap();
    assert_eq!(decoded, props(&[("a", "1"), ("b", "2")]));
}

#[test]
fn decode_empty_input_is_empty_map() {
    assert!(decode(b"").unwrap().is_empty());
}

#[test]
fn decode_whitespace_only_lines_are_skipped() {
    assert!(decode(b"\n   \n\t\n\r\n").unwrap().is_empty());
    let decoded = decode(b"\n\n a = b \n\n").unwrap();
    assert_eq!(decoded, props(&[("a", "b")]));
}

#[test]
fn decode_last_duplicate_wins() {
    let decoded = decode(b"k = first\nk = second").unwrap();
    assert_eq!(decoded, props(&[("k", "second")]));
}

#[test]
fn decode_allows_empty_key_and_value() {
    let decoded = decode(b"=\nk =").unwrap();
    assert_eq!(decoded, props(&[("", ""), ("k", "")]));
}

#[test]
fn decode_keeps_good_lines_and_reports_bad_ones() {
    let err = decode(b"foo = bar\nbadline\nbaz = 2").unwrap_err();

    assert_eq!(err.partial(), &props(&[("foo", "bar"), ("baz", "2")]));
    assert_eq!(err.lines().len(), 1);
    assert_eq!(err.lines()[0].line, "badline");
    assert!(err.to_string().contains("badline"));
}

#[test]
fn decode_rejects_value_containing_separator() {
    let err = decode(b"key=a=b").unwrap_err();
    assert!(err.partial().is_empty());
    assert_eq!(err.to_string(), "Invalid property: key=a=b");
}

#[test]
fn decode_joins_multiple_errors() {
    let err = decode(b"one\nok = 1\n  two  \nx=y=z").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid property: one; Invalid property: two; Invalid property: x=y=z"
    );
    assert_eq!(err.into_partial(), props(&[("ok", "1")]));
}

#[test]
fn decode_rejects_non_utf8_line_and_keeps_the_rest() {
    let err = decode(b"a = 1\nname = Jos\xe9\nb = 2").unwrap_err();

    assert_eq!(err.partial(), &props(&[("a", "1"), ("b", "2")]));
    assert_eq!(err.lines().len(), 1);
    assert!(err.lines()[0].line.starts_with("name = Jos"));
    assert!(!validate(b"name = Jos\xe9"));
}

#[test]
fn decode_accepts_multibyte_utf8() {
    let decoded = decode("name = José\ncity = Zürich".as_bytes()).unwrap();
    assert_eq!(decoded, props(&[("name", "José"), ("city", "Zürich")]));
}

#[test]
fn decode_lossy_returns_partial_map_and_error() {
    let (map, err) = decode_lossy(b"a = 1\nnope");
    assert_eq!(map, props(&[("a", "1")]));
    assert!(err.is_some());

    let (map, err) = decode_lossy(b"a = 1");
    assert_eq!(map, props(&[("a", "1")]));
    assert!(err.is_none());
}

// -------------------- Encode --------------------

#[test]
fn encode_formats_sorted_lines_without_trailing_newline() {
    let bytes = encode(&props(&[("b", "2"), ("a", "1"), ("c", "three")])).unwrap();
    assert_eq!(bytes, b"a = 1\nb = 2\nc = three");
}

#[test]
fn encode_empty_map_is_empty() {
    assert!(encode(&Properties::new()).unwrap().is_empty());
}

#[test]
fn encode_trims_keys_and_values() {
    let bytes = encode(&props(&[("  k ", " v\n")])).unwrap();
    assert_eq!(bytes, b"k = v");
}

#[test]
fn encode_rejects_newline_in_key() {
    let err = encode(&props(&[("k\ne1", "v")])).unwrap_err();
    assert_eq!(
        err,
        EncodeError::ReservedCharacter {
            field: Field::Key,
            content: "k\ne1".to_string(),
        }
    );
}

#[test]
fn encode_rejects_separator_in_value() {
    let err = encode(&props(&[("k", "v=1")])).unwrap_err();
    assert_eq!(err.to_string(), "Invalid property value \"v=1\"");
}

#[test]
fn encode_rejects_newline_inside_value() {
    let err = encode(&props(&[("k", "a\nb")])).unwrap_err();
    assert_eq!(
        err,
        EncodeError::ReservedCharacter {
            field: Field::Value,
            content: "a\nb".to_string(),
        }
    );
}

#[test]
fn encode_rejects_each_reserved_character_in_either_field() {
    let cases = [
        (("a=b", "v"), Field::Key),
        (("a\nb", "v"), Field::Key),
        (("k", "a=b"), Field::Value),
        (("k", "a\nb"), Field::Value),
        ((" k ", " =lead"), Field::Value),
    ];
    for ((key, value), field) in cases {
        match encode(&props(&[(key, value)])) {
            Err(EncodeError::ReservedCharacter { field: got, .. }) => {
                assert_eq!(got, field, "{:?} = {:?}", key, value)
            }
            Ok(_) => panic!("{:?} = {:?} should not encode", key, value),
        }
    }
}

#[test]
fn encode_checks_key_before_value() {
    let err = encode(&props(&[("a=b", "c=d")])).unwrap_err();
    assert!(matches!(
        err,
        EncodeError::ReservedCharacter { field: Field::Key, .. }
    ));
}

#[test]
fn encode_fails_fast_even_with_valid_entries() {
    let result = encode(&props(&[("a", "1"), ("b", "x=y"), ("c", "3")]));
    assert!(result.is_err());
}

// -------------------- Round trip & validate --------------------

#[test]
fn round_trip_preserves_entries() {
    let original = props(&[
        ("foo", "bar"),
        ("baz", "boo"),
        ("a", "1"),
        ("with space", "multi word value"),
        ("empty", ""),
    ]);
    let decoded = decode(&encode(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn round_trip_many_entries() {
    let original: Properties = (0..500)
        .map(|i| (format!("key{}", i), format!("value {}", i * 7)))
        .collect();
    let decoded = decode(&encode(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn round_trip_generated_entries_with_inner_whitespace() {
    let fillers = [" ", "\t", "  ", " \t ", "x y", "a\tb c"];
    let mut original = Properties::new();
    for (i, a) in fillers.iter().enumerate() {
        for (j, b) in fillers.iter().enumerate() {
            let key = format!("k{}{}{}", i, a, j);
            let value = format!("v{}{}{}{}", j, b, a, i);
            original.insert(key, value);
        }
    }

    let bytes = encode(&original).unwrap();
    assert_eq!(bytes.iter().filter(|&&c| c == b'\n').count(), original.len() - 1);
    assert_eq!(decode(&bytes).unwrap(), original);
}

#[test]
fn validate_matches_decode_outcome() {
    assert!(validate(b""));
    assert!(validate(b"   \n  "));
    assert!(validate(b"a = b"));
    assert!(!validate(b"a = b\nbroken"));
    assert!(!validate(b"a=b=c"));
}
