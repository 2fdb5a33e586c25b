use serde::{Serialize, Deserialize};
use log::debug;
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use crate::prime_multiset::PrimeMultiset;
use crate::multiset_error::MultisetError;

// ============================================================================
// Protection DoS parsing — limite de taille de l'encodage sérialisé
//
// BigUint::from_str_radix est quadratique en taille d'entrée : un champ
// hex de plusieurs Mo sature le CPU. La longueur est vérifiée AVANT toute
// conversion. 65 536 caractères hex = 262 144 bits d'encodage.
// ============================================================================

/// Longueur maximale du champ `encoding` en caractères hexadécimaux.
pub const MAX_HEX_FIELD_LEN: usize = 65_536;

// ============================================================================
// Structure JSON
//
// Persister un multiensemble revient à persister son encodage : aucune
// liste d'éléments n'est écrite (il faudrait factoriser).
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MultisetJson {
    pub encoding: String,
}

// ============================================================================
// Conversion BigUint ↔ hexadécimal
// ============================================================================

pub fn biguint_to_hex(value: &BigUint) -> String {
    value.to_str_radix(16).to_uppercase()
}

/// Convertit une string hex en BigUint.
///
/// Retourne :
///   Err(HexFieldTooLong)  si len > MAX_HEX_FIELD_LEN
///   Err(HexParseError)    si le contenu n'est pas un hex valide
pub fn hex_to_biguint(hex_str: &str) -> Result<BigUint, MultisetError> {
    if hex_str.len() > MAX_HEX_FIELD_LEN {
        return Err(MultisetError::HexFieldTooLong {
            actual:  hex_str.len(),
            maximum: MAX_HEX_FIELD_LEN,
        });
    }
    BigUint::from_str_radix(hex_str, 16)
        .map_err(|_| MultisetError::HexParseError)
}

// ============================================================================
// Conversion structures Rust ↔ JSON
// Un encodage nul est refusé au chargement : il casserait encoding >= 1.
// ============================================================================

pub fn multiset_to_json(multiset: &PrimeMultiset) -> MultisetJson {
    MultisetJson {
        encoding: biguint_to_hex(multiset.encoding()),
    }
}

pub fn json_to_multiset(json: &MultisetJson) -> Result<PrimeMultiset, MultisetError> {
    let encoding = hex_to_biguint(&json.encoding)?;
    if encoding.is_zero() {
        debug!("encodage nul refusé au chargement");
        return Err(MultisetError::ZeroEncoding);
    }
    Ok(PrimeMultiset::from_encoding(encoding))
}

pub fn to_json_string(multiset: &PrimeMultiset) -> Result<String, MultisetError> {
    Ok(serde_json::to_string_pretty(&multiset_to_json(multiset))?)
}

pub fn from_json_string(raw: &str) -> Result<PrimeMultiset, MultisetError> {
    let json: MultisetJson = serde_json::from_str(raw)?;
    json_to_multiset(&json)
}
