//! This crate is a from-scratch growable array: one contiguous, heap-allocated
//! buffer wrapped in a [`Vector`] that tracks how many slots hold live elements
//! versus how many are merely allocated.
//!
//! # Purpose
//! Writing a dynamic array from raw allocations is the classic way to properly
//! understand capacity policies, element lifetimes across reallocation and the
//! safety contracts of copy and move, so that's exactly what this crate does.
//! Nothing here is built on [`Vec`] - in fact this library doesn't use [`Vec`]
//! at all.
//!
//! # Method
//! All storage management funnels through a single reallocation primitive:
//! growth doubles the capacity (starting from 1) until a request fits, and
//! [`shrink_to_fit`](Vector::shrink_to_fit) halves it while the length still
//! fits in half. [`Vector`] implements [`Deref<Target = [T]>`](std::ops::Deref)
//! (and DerefMut), which saves me from writing some of the more repetitive
//! slice functionality by hand.
//!
//! # Error Handling
//! Every operation with a precondition reports its violation through a strongly
//! typed error rather than silently clamping: an out-of-range checked access,
//! an operation that needs a non-empty Vector and a growth request beyond the
//! maximum capacity each have their own type, with an enum for callers that
//! want to union them. Allocator exhaustion goes through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) as recommended, which
//! also means a failed allocation can never tear down a buffer that is still
//! in use.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove
//! the need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod vector;

pub(crate) mod util;

#[doc(inline)]
pub use vector::{CapacityOverflow, EmptyVector, IndexOutOfBounds, IntoIter, Vector, VectorError};
