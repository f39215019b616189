use almanac_utils::{compress_obj, decompress_obj, dejsonify, jsonify};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: u32,
    alpha: Vec<i64>,
    nested: Nested,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Nested {
    y: String,
    b: bool,
}

fn sample() -> Sample {
    Sample {
        zeta: 7,
        alpha: vec![79, 14, 55, 13],
        nested: Nested {
            y: "seed-to-soil".to_string(),
            b: true,
        },
    }
}

#[test]
fn test_jsonify_sorts_keys() {
    assert_eq!(
        jsonify(&sample()).unwrap(),
        r#"{"alpha":[79,14,55,13],"nested":{"b":true,"y":"seed-to-soil"},"zeta":7}"#
    );
}

#[test]
fn test_jsonify_sorts_keys_inside_arrays() {
    let value = json!([{"b": 1, "a": 2}]);
    assert_eq!(jsonify(&value).unwrap(), r#"[{"a":2,"b":1}]"#);
}

#[test]
fn test_dejsonify() {
    let parsed: Sample = dejsonify(&jsonify(&sample()).unwrap()).unwrap();
    assert_eq!(parsed, sample());
}

#[test]
fn test_dejsonify_rejects_garbage() {
    assert!(dejsonify::<Value>("{not json").is_err());
}

#[test]
fn test_compress_obj() {
    let compressed = compress_obj(&sample()).unwrap();
    let decompressed: Sample = decompress_obj(&compressed).unwrap();
    assert_eq!(decompressed, sample());
}

#[test]
fn test_decompress_obj_rejects_plain_bytes() {
    assert!(decompress_obj::<Sample>(b"plain").is_err());
}
