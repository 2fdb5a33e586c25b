// ===========================================================================
// Gestion centralisée des erreurs du multiensemble
//
// Une seule erreur concerne le multiensemble lui-même : remove() sur un
// élément absent. Les autres variantes viennent uniquement de la frontière
// de sérialisation (multiset_storage) et ne sont jamais levées par les
// opérations algébriques.
// ===========================================================================

use std::fmt;
use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq)]
pub enum MultisetError {
    // --- Erreur du multiensemble ---
    /// remove() sur un élément de multiplicité nulle (encodage non divisible)
    ElementNotPresent { element: BigUint },

    // --- Erreurs de parsing de l'encodage sérialisé ---
    /// Parsing hexadécimal invalide dans le champ `encoding`
    HexParseError,
    /// Champ hex trop long : conversion BigUint coûteuse refusée
    HexFieldTooLong { actual: usize, maximum: usize },
    /// Encodage nul : violerait l'invariant encoding >= 1
    ZeroEncoding,
    /// Document JSON mal formé
    Json(String),
}

impl fmt::Display for MultisetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultisetError::ElementNotPresent { element } =>
                write!(f, "Élément {element} absent du multiensemble"),
            MultisetError::HexParseError =>
                write!(f, "Parsing hexadécimal invalide dans l'encodage sérialisé"),
            MultisetError::HexFieldTooLong { actual, maximum } =>
                write!(f, "Champ hexadécimal trop long : {actual} caractères (maximum autorisé : {maximum})"),
            MultisetError::ZeroEncoding =>
                write!(f, "Encodage nul refusé : un multiensemble vaut au moins 1"),
            MultisetError::Json(msg) =>
                write!(f, "JSON invalide : {msg}"),
        }
    }
}

impl std::error::Error for MultisetError {}

impl From<serde_json::Error> for MultisetError {
    fn from(e: serde_json::Error) -> Self {
        MultisetError::Json(e.to_string())
    }
}
