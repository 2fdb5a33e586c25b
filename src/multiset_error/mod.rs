pub mod multiset_error;

pub use multiset_error::MultisetError;
