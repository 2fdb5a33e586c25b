// Réexporte les primitives arithmétiques du multiensemble

mod math;

pub use math::{gcd, lcm, divides, checked_quotient};
