pub mod pm_core;

pub use pm_core::PrimeMultiset;
