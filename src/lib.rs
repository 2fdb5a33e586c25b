// Déclaration des modules
pub mod multiset_error;
pub mod prime_multiset;
pub mod multiset_storage;

pub use crate::prime_multiset::math;

// Primitives arithmétiques (pgcd, ppcm, divisibilité)
pub use crate::prime_multiset::math::{gcd, lcm, divides};

// Type principal
pub use crate::prime_multiset::PrimeMultiset;

// Erreur centralisée
pub use multiset_error::MultisetError;

// Sérialisation JSON de l'encodage
pub use multiset_storage::{MultisetJson, to_json_string, from_json_string};
