//! Slicing helpers for ordered sequences
//!
//! This crate adds positional slicing to `[T]`: dropping or keeping elements
//! from either end, and selecting or excluding elements by index. Every
//! operation is pure and returns `None` (the absent result) for degenerate
//! input instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use strex_seq::SliceExt;
//!
//! let items = [1, 2, 3, 4, 5];
//!
//! // Positive counts work from the tail, negative counts from the head
//! assert_eq!(items.skip_last(2), Some(&[1, 2, 3][..]));
//! assert_eq!(items.skip_last(-2), Some(&[3, 4, 5][..]));
//! assert_eq!(items.take_last(2), Some(&[4, 5][..]));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod slicing;

pub use slicing::{skip_last, take_last};

#[cfg(feature = "alloc")]
pub use slicing::{skip_at_indices, take_at_indices};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Extension methods for slices
///
/// Each method delegates to the free function of the same name in
/// [`slicing`].
pub trait SliceExt<T> {
    /// Drop `|n|` elements from the tail (`n > 0`) or the head (`n < 0`)
    fn skip_last(&self, n: isize) -> Option<&[T]>;

    /// Keep `|n|` elements from the tail (`n > 0`) or the head (`n < 0`)
    fn take_last(&self, n: isize) -> Option<&[T]>;

    /// Keep only the elements at the given positions
    #[cfg(feature = "alloc")]
    fn take_at_indices(&self, indices: Option<&[usize]>) -> Option<Vec<T>>
    where
        T: Clone;

    /// Drop the elements at the given positions
    #[cfg(feature = "alloc")]
    fn skip_at_indices(&self, indices: Option<&[usize]>) -> Option<Vec<T>>
    where
        T: Clone;
}

impl<T> SliceExt<T> for [T] {
    fn skip_last(&self, n: isize) -> Option<&[T]> {
        slicing::skip_last(self, n)
    }

    fn take_last(&self, n: isize) -> Option<&[T]> {
        slicing::take_last(self, n)
    }

    #[cfg(feature = "alloc")]
    fn take_at_indices(&self, indices: Option<&[usize]>) -> Option<Vec<T>>
    where
        T: Clone,
    {
        slicing::take_at_indices(self, indices)
    }

    #[cfg(feature = "alloc")]
    fn skip_at_indices(&self, indices: Option<&[usize]>) -> Option<Vec<T>>
    where
        T: Clone,
    {
        slicing::skip_at_indices(self, indices)
    }
}
