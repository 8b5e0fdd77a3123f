#![doc(hidden)]

#[cfg(feature = "proptest")]
pub mod proptest;
pub mod testing;
