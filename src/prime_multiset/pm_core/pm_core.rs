use std::fmt;
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::One;
use crate::multiset_error::MultisetError;
use crate::prime_multiset::math::{checked_quotient, divides};

// ============================================================================
// PrimeMultiset — multiensemble de nombres premiers stocké dans un seul entier
//
// La multiplicité du premier p est l'exposant de p dans `encoding` :
//   {2, 2, 3}  <->  2²·3 = 12
//   {}         <->  1
//
// CONTRAT D'ENTRÉE :
//   Les éléments ne sont PAS vérifiés. Un test de primalité coûterait plus
//   cher que toutes les opérations du type réunies. Passer un non-premier
//   ne provoque ni UB ni panic, mais la sémantique de multiensemble n'est
//   plus garantie.
//
// ABSENCE VOLONTAIRE :
//   Ni len() ni itération : les deux exigent de factoriser l'encodage.
// ============================================================================

/// Multiensemble de nombres premiers encodé par un entier positif.
///
/// Les éléments passés aux opérations doivent être premiers ; rien n'est
/// vérifié, et le résultat n'est pas spécifié sinon.
///
/// ```
/// use num_bigint::BigUint;
/// use prime_multiset::PrimeMultiset;
///
/// let mut m = PrimeMultiset::from_primes([2u32, 2, 3]);
/// assert_eq!(m.encoding(), &BigUint::from(12u32));
/// assert!(m.contains(2u32));
/// m.discard(5u32);
/// assert_eq!(m.encoding(), &BigUint::from(12u32));
/// ```
///
/// Le cardinal n'existe pas :
///
/// ```compile_fail
/// use prime_multiset::PrimeMultiset;
///
/// let m = PrimeMultiset::from_primes([2u32, 3]);
/// let _ = m.len();
/// ```
///
/// L'énumération des éléments non plus :
///
/// ```compile_fail
/// use prime_multiset::PrimeMultiset;
///
/// let m = PrimeMultiset::from_primes([2u32, 3]);
/// for _p in &m {}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeMultiset {
    pub(crate) encoding: BigUint,
}

impl PrimeMultiset {
    // -----------------------------------------------------------------------
    // Constructeurs
    // -----------------------------------------------------------------------

    /// Multiensemble vide (encodage 1).
    pub fn new() -> Self {
        PrimeMultiset { encoding: BigUint::one() }
    }

    /// Reprend un encodage existant tel quel, sans validation.
    ///
    /// `initial_value` doit être >= 1 ; l'appelant en est garant.
    pub fn from_encoding(initial_value: BigUint) -> Self {
        PrimeMultiset { encoding: initial_value }
    }

    /// Multiensemble contenant une occurrence de chaque premier de `sequence`.
    pub fn from_primes<I, T>(sequence: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        Self::with_primes(sequence, BigUint::one())
    }

    /// Forme générale : `initial_value` multiplié par chaque premier de
    /// `sequence`, dans l'ordre. Les doublons comptent.
    pub fn with_primes<I, T>(sequence: I, initial_value: BigUint) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigUint>,
    {
        let encoding = sequence
            .into_iter()
            .fold(initial_value, |acc, p| {
                let p: BigUint = p.into();
                acc * p
            });
        PrimeMultiset { encoding }
    }

    // -----------------------------------------------------------------------
    // Accès à l'encodage
    // -----------------------------------------------------------------------

    pub fn encoding(&self) -> &BigUint {
        &self.encoding
    }

    pub fn into_encoding(self) -> BigUint {
        self.encoding
    }

    // -----------------------------------------------------------------------
    // Opérations modifiantes
    // -----------------------------------------------------------------------

    /// Ajoute une occurrence de `element`.
    pub fn add<E: Into<BigUint>>(&mut self, element: E) {
        let element: BigUint = element.into();
        trace!("add {element} -> encodage {}", self.encoding);
        self.encoding *= element;
    }

    /// Retire une occurrence de `element`.
    ///
    /// Retourne `Err(ElementNotPresent)` si la multiplicité est nulle ;
    /// l'encodage est alors inchangé.
    pub fn remove<E: Into<BigUint>>(&mut self, element: E) -> Result<(), MultisetError> {
        let element: BigUint = element.into();
        match checked_quotient(&self.encoding, &element) {
            Some(quotient) => {
                trace!("remove {element} -> encodage {quotient}");
                self.encoding = quotient;
                Ok(())
            }
            None => {
                debug!("remove {element} : absent de l'encodage {}", self.encoding);
                Err(MultisetError::ElementNotPresent { element })
            }
        }
    }

    /// Comme `remove`, mais sans erreur si l'élément est absent.
    pub fn discard<E: Into<BigUint>>(&mut self, element: E) {
        let element: BigUint = element.into();
        if let Some(quotient) = checked_quotient(&self.encoding, &element) {
            trace!("discard {element} -> encodage {quotient}");
            self.encoding = quotient;
        }
    }

    pub fn clear(&mut self) {
        self.encoding = BigUint::one();
    }

    // -----------------------------------------------------------------------
    // Opérations non modifiantes
    // -----------------------------------------------------------------------

    /// Multiplicité de `element` >= 1.
    pub fn contains<E: Into<BigUint>>(&self, element: E) -> bool {
        divides(&element.into(), &self.encoding)
    }

    /// Vide si et seulement si l'encodage vaut 1.
    ///
    /// Pas de `len() == 0` : le cardinal demanderait une factorisation.
    pub fn is_empty(&self) -> bool {
        self.encoding.is_one()
    }
}

impl Default for PrimeMultiset {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for PrimeMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimeMultiset({})", self.encoding)
    }
}

impl From<PrimeMultiset> for BigUint {
    fn from(m: PrimeMultiset) -> Self { m.encoding }
}

impl<T: Into<BigUint>> FromIterator<T> for PrimeMultiset {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_primes(iter)
    }
}

impl<T: Into<BigUint>> Extend<T> for PrimeMultiset {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for p in iter {
            self.add(p);
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_new_is_empty() {
        let m = PrimeMultiset::new();
        assert!(m.is_empty());
        assert_eq!(m.encoding(), &big(1));
        assert_eq!(PrimeMultiset::default(), m);
    }

    #[test]
    fn test_with_primes_folds_into_initial_value() {
        let m = PrimeMultiset::with_primes([3u32, 5], big(4));
        assert_eq!(m.encoding(), &big(60));
        assert_eq!(PrimeMultiset::with_primes(Vec::<u32>::new(), big(7)).encoding(), &big(7));
    }

    #[test]
    fn test_scenario_add_remove_discard_clear() {
        let mut m = PrimeMultiset::new();
        m.add(2u32);
        m.add(2u32);
        m.add(3u32);
        assert_eq!(m.encoding(), &big(12));

        assert!(m.contains(2u32));
        assert!(!m.contains(5u32));

        let err = m.remove(5u32).unwrap_err();
        assert_eq!(err, MultisetError::ElementNotPresent { element: big(5) });
        assert_eq!(m.encoding(), &big(12));

        m.discard(5u32);
        assert_eq!(m.encoding(), &big(12));

        m.clear();
        assert_eq!(m.encoding(), &big(1));
        assert!(m.is_empty());
    }

    #[test]
    fn test_remove_decrements_multiplicity() {
        let mut m = PrimeMultiset::from_primes([2u32, 2, 3]);
        m.remove(2u32).unwrap();
        assert!(m.contains(2u32));
        m.remove(2u32).unwrap();
        assert!(!m.contains(2u32));
        assert!(matches!(m.remove(2u32), Err(MultisetError::ElementNotPresent { .. })));
    }

    #[test]
    fn test_add_then_remove_restores_encoding() {
        let original = PrimeMultiset::from_primes([2u32, 7, 7, 11]);
        for p in [2u32, 3, 7, 13, 104_729] {
            let mut m = original.clone();
            m.add(p);
            m.remove(p).unwrap();
            assert_eq!(m, original);
        }
    }

    #[test]
    fn test_zero_element_is_never_present() {
        let mut m = PrimeMultiset::from_primes([2u32, 3]);
        assert!(!m.contains(0u32));
        assert!(m.remove(0u32).is_err());
        m.discard(0u32);
        assert_eq!(m.encoding(), &big(6));
    }

    #[test]
    fn test_membership_original_cases() {
        assert!(PrimeMultiset::new().is_empty());
        assert!(!PrimeMultiset::from_primes([2u32, 3, 7]).is_empty());
        assert!(PrimeMultiset::from_primes([2u32, 3, 7, 7, 11]).contains(7u32));
        assert!(!PrimeMultiset::from_primes([2u32, 3, 7, 7, 11]).contains(5u32));
    }

    #[test]
    fn test_collect_and_extend() {
        let mut m: PrimeMultiset = vec![2u64, 3].into_iter().collect();
        m.extend([3u64, 5]);
        assert_eq!(m.encoding(), &big(90));
        assert_eq!(BigUint::from(m), big(90));
    }

    #[test]
    fn test_big_encoding_beyond_u128() {
        // 40 copies de 104729 dépassent largement 128 bits
        let mut m = PrimeMultiset::from_primes(std::iter::repeat(104_729u64).take(40));
        assert!(m.encoding().bits() > 128);
        for _ in 0..40 {
            m.remove(104_729u64).unwrap();
        }
        assert!(m.is_empty());
    }
}
