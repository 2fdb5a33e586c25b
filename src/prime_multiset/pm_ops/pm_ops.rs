use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};
use num_traits::Zero;
use crate::prime_multiset::math::{gcd, lcm};
use crate::prime_multiset::pm_core::PrimeMultiset;

// ============================================================================
// Opérations ensemblistes usuelles
//
//   &  intersection  min des multiplicités   pgcd(a, b)
//   |  union         max des multiplicités   ppcm(a, b)
//   +  somme         somme des multiplicités a·b
//   -  différence    a - min(a, b) par premier   a / pgcd(a, b)
//
// Les premiers présents seulement dans `other` ne participent pas au pgcd,
// donc la différence ne peut jamais rendre une multiplicité négative.
// ============================================================================

impl PrimeMultiset {
    pub fn intersection(&self, other: &PrimeMultiset) -> PrimeMultiset {
        PrimeMultiset::from_encoding(gcd(&self.encoding, &other.encoding))
    }

    pub fn intersect_with(&mut self, other: &PrimeMultiset) {
        self.encoding = gcd(&self.encoding, &other.encoding);
    }

    pub fn union(&self, other: &PrimeMultiset) -> PrimeMultiset {
        PrimeMultiset::from_encoding(lcm(&self.encoding, &other.encoding))
    }

    pub fn union_with(&mut self, other: &PrimeMultiset) {
        self.encoding = lcm(&self.encoding, &other.encoding);
    }

    pub fn sum(&self, other: &PrimeMultiset) -> PrimeMultiset {
        PrimeMultiset::from_encoding(&self.encoding * &other.encoding)
    }

    pub fn sum_with(&mut self, other: &PrimeMultiset) {
        self.encoding *= &other.encoding;
    }

    pub fn difference(&self, other: &PrimeMultiset) -> PrimeMultiset {
        let mut result = self.clone();
        result.subtract(other);
        result
    }

    /// Retire de `self` les occurrences communes avec `other`.
    pub fn subtract(&mut self, other: &PrimeMultiset) {
        let common = gcd(&self.encoding, &other.encoding);
        // pgcd nul seulement pour deux encodages nuls (hors domaine)
        if !common.is_zero() {
            self.encoding /= common;
        }
    }
}

// ---------------------------------------------------------------------------
// Surcharge des opérateurs : chaque opérateur existe pour les quatre
// combinaisons valeur/référence, plus la forme composée avec et sans &.
// ---------------------------------------------------------------------------
macro_rules! multiset_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $value:ident, $in_place:ident) => {
        impl $op<&PrimeMultiset> for &PrimeMultiset {
            type Output = PrimeMultiset;
            fn $op_fn(self, rhs: &PrimeMultiset) -> PrimeMultiset {
                self.$value(rhs)
            }
        }

        impl $op<PrimeMultiset> for &PrimeMultiset {
            type Output = PrimeMultiset;
            fn $op_fn(self, rhs: PrimeMultiset) -> PrimeMultiset {
                self.$value(&rhs)
            }
        }

        impl $op<&PrimeMultiset> for PrimeMultiset {
            type Output = PrimeMultiset;
            fn $op_fn(mut self, rhs: &PrimeMultiset) -> PrimeMultiset {
                self.$in_place(rhs);
                self
            }
        }

        impl $op<PrimeMultiset> for PrimeMultiset {
            type Output = PrimeMultiset;
            fn $op_fn(mut self, rhs: PrimeMultiset) -> PrimeMultiset {
                self.$in_place(&rhs);
                self
            }
        }

        impl $assign<&PrimeMultiset> for PrimeMultiset {
            fn $assign_fn(&mut self, rhs: &PrimeMultiset) {
                self.$in_place(rhs);
            }
        }

        impl $assign<PrimeMultiset> for PrimeMultiset {
            fn $assign_fn(&mut self, rhs: PrimeMultiset) {
                self.$in_place(&rhs);
            }
        }
    };
}

multiset_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection, intersect_with);
multiset_binop!(BitOr, bitor, BitOrAssign, bitor_assign, union, union_with);
multiset_binop!(Add, add, AddAssign, add_assign, sum, sum_with);
multiset_binop!(Sub, sub, SubAssign, sub_assign, difference, subtract);
