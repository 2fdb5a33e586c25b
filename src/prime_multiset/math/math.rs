use num_bigint::BigUint;
use num_traits::Zero;
use num_integer::Integer;

// ---------------------------------------------------------------------------
// Primitives entières du multiensemble
//
// Aucune de ces fonctions ne factorise : pgcd, ppcm, division et reste
// suffisent à toutes les opérations ensemblistes.
// ---------------------------------------------------------------------------

// Calcule le pgcd de deux nombres (minimum des exposants par premier)
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

// ppcm(a, b) = a·b / pgcd(a, b) (maximum des exposants par premier).
// pgcd nul seulement si a = b = 0, hors domaine : on renvoie 0 sans diviser.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    let g = gcd(a, b);
    if g.is_zero() {
        return BigUint::zero();
    }
    (a * b) / g
}

/// Vrai si `divisor` divise `dividend`.
///
/// Un diviseur nul ne divise jamais rien ici : évite le panic de `%` sur
/// BigUint quand l'appelant passe 0 comme « élément ».
pub fn divides(divisor: &BigUint, dividend: &BigUint) -> bool {
    if divisor.is_zero() {
        return false;
    }
    dividend.is_multiple_of(divisor)
}

// Quotient exact value / element, ou None si element ne divise pas value.
pub fn checked_quotient(value: &BigUint, element: &BigUint) -> Option<BigUint> {
    if element.is_zero() {
        return None;
    }
    let (quotient, remainder) = value.div_rem(element);
    if remainder.is_zero() {
        Some(quotient)
    } else {
        None
    }
}
