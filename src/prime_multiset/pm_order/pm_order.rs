use std::cmp::Ordering;
use crate::prime_multiset::math::divides;
use crate::prime_multiset::pm_core::PrimeMultiset;

// ============================================================================
// Inclusion de multiensembles
//
// a divise b  <=>  chaque exposant de a est <= celui de b  <=>  A ⊆ B.
// L'ordre est partiel : {2} et {3} sont incomparables, donc pas de Ord.
// L'égalité (==, !=) est celle des encodages, dérivée sur PrimeMultiset.
// ============================================================================

impl PrimeMultiset {
    /// `self <= other` : chaque élément de `self` apparaît dans `other`
    /// avec une multiplicité au moins égale.
    pub fn is_subset(&self, other: &PrimeMultiset) -> bool {
        divides(&self.encoding, &other.encoding)
    }

    pub fn is_proper_subset(&self, other: &PrimeMultiset) -> bool {
        self.is_subset(other) && self != other
    }

    pub fn is_superset(&self, other: &PrimeMultiset) -> bool {
        divides(&other.encoding, &self.encoding)
    }

    pub fn is_proper_superset(&self, other: &PrimeMultiset) -> bool {
        self.is_superset(other) && self != other
    }
}

impl PartialOrd for PrimeMultiset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_subset(other) {
            Some(Ordering::Less)
        } else if self.is_superset(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
#[cfg(test)]
#[allow(clippy::eq_op, clippy::neg_cmp_op_on_partial_ord, clippy::nonminimal_bool)]
mod tests {
    use super::*;
    use rand::Rng;

    fn pm(primes: &[u32]) -> PrimeMultiset {
        PrimeMultiset::from_primes(primes.iter().copied())
    }

    #[test]
    fn test_original_inclusion_cases() {
        assert!(pm(&[2, 3]) < pm(&[2, 2, 2, 3]));
        assert!(!(pm(&[2, 3, 7]) < pm(&[2, 3, 7])));
        assert!(pm(&[2, 3]) <= pm(&[2, 2, 2, 3]));
        assert!(pm(&[2, 3, 7]) <= pm(&[2, 3, 7]));
        assert!(pm(&[2, 3, 7, 7, 11]) > pm(&[2, 7, 11]));
        assert!(!(pm(&[2, 3, 7]) > pm(&[2, 3, 7])));
        assert!(pm(&[2, 3, 7, 7, 11]) >= pm(&[2, 7, 11]));
        assert!(pm(&[2, 3, 7]) >= pm(&[2, 3, 7]));
    }

    #[test]
    fn test_equality() {
        assert_eq!(pm(&[3, 2, 2]), pm(&[2, 2, 3]));
        assert_ne!(pm(&[2, 3]), pm(&[2, 2, 3]));
    }

    #[test]
    fn test_incomparable_multisets() {
        let a = pm(&[2, 2]);
        let b = pm(&[2, 3]);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a <= b) && !(a >= b) && !(a < b) && !(a > b));
    }

    #[test]
    fn test_named_predicates_match_operators() {
        let small = pm(&[2, 7]);
        let big = pm(&[2, 2, 7, 11]);
        assert!(small.is_subset(&big) && small <= big);
        assert!(small.is_proper_subset(&big) && small < big);
        assert!(big.is_superset(&small) && big >= small);
        assert!(big.is_proper_superset(&small) && big > small);
        assert!(!big.is_subset(&small));
    }

    #[test]
    fn test_empty_is_subset_of_everything() {
        let empty = PrimeMultiset::new();
        assert!(empty <= pm(&[5, 5, 13]));
        assert!(empty <= empty);
        assert!(!(empty < empty));
    }

    const PRIMES: &[u32] = &[2, 3, 5, 7, 11];

    fn draw(rng: &mut impl Rng) -> PrimeMultiset {
        (0..rng.gen_range(0..6))
            .map(|_| PRIMES[rng.gen_range(0..PRIMES.len())])
            .collect()
    }

    #[test]
    fn test_random_subset_laws() {
        let mut rng = rand::thread_rng();
        for _ in 0..300 {
            let a = draw(&mut rng);
            let b = draw(&mut rng);

            assert!(a <= a);
            assert!(!(a < a));
            if a <= b && b <= a {
                assert_eq!(a, b);
            }
            assert_eq!(a < b, b > a);
            assert!((&a & &b) <= a && (&a & &b) <= b);
            assert!((&a | &b) >= a && (&a | &b) >= b);
            assert!((&a - &b) <= a);
        }
    }
}
