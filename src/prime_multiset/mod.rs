pub mod math;
pub mod pm_core;
pub mod pm_ops;
pub mod pm_order;

pub use pm_core::PrimeMultiset;
