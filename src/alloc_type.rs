//! Alias layer over `std`/`alloc` collection types.
//!
//! Lets the rest of the crate name `Vec` and `String` without caring whether
//! the `std` feature is enabled.

#[cfg(feature = "std")]
pub(crate) type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub(crate) type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub(crate) type String = std::string::String;
#[cfg(not(feature = "std"))]
pub(crate) type String = alloc::string::String;
