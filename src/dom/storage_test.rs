use super::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Prefs {
    theme: String,
    portions: u32,
    allergens: Vec<String>,
}

fn prefs() -> Prefs {
    Prefs {
        theme: "dark".to_owned(),
        portions: 2,
        allergens: vec!["молоко".to_owned(), "орехи".to_owned()],
    }
}

// =============================================================
// encode / decode round trip
// =============================================================

#[test]
fn encode_then_decode_is_identity_for_structs() {
    let raw = encode(&prefs()).expect("encoded");
    let back: Prefs = decode(&raw).expect("decoded");
    assert_eq!(back, prefs());
}

#[test]
fn encode_then_decode_is_identity_for_json_values() {
    let value = serde_json::json!({
        "n": 1,
        "nested": {"list": [1, 2, 3], "flag": true},
        "text": "строка"
    });
    let raw = encode(&value).expect("encoded");
    let back: serde_json::Value = decode(&raw).expect("decoded");
    assert_eq!(back, value);
}

#[test]
fn decode_of_corrupt_json_is_none() {
    assert_eq!(decode::<Prefs>("{not json"), None);
}

#[test]
fn decode_of_mismatched_shape_is_none() {
    assert_eq!(decode::<Prefs>(r#"{"theme": 5}"#), None);
}

// =============================================================
// host behavior without a browser
// =============================================================

#[test]
#[cfg(not(feature = "web"))]
fn load_without_storage_is_none() {
    // Off-web builds have no backing store at all.
    assert_eq!(load::<Prefs>("anything"), None);
}

#[test]
#[cfg(not(feature = "web"))]
fn save_and_remove_without_storage_are_no_ops() {
    save("k", &prefs());
    remove("k");
    assert_eq!(load::<Prefs>("k"), None);
}
