pub mod multiset_storage;

// Réexportations multiset_storage
pub use multiset_storage::{
    MultisetJson, MAX_HEX_FIELD_LEN,
    biguint_to_hex, hex_to_biguint,
    multiset_to_json, json_to_multiset,
    to_json_string, from_json_string,
};
