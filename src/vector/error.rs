use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A checked accessor ([`at`](super::Vector::at),
/// [`at_mut`](super::Vector::at_mut)) was called with an index that has no
/// element behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The number of elements at the time of the call.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for Vector with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An operation that needs at least one element ([`pop_back`](super::Vector::pop_back),
/// [`front`](super::Vector::front), [`back`](super::Vector::back)) was called
/// on a Vector with none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyVector;

impl Display for EmptyVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vector contains no elements!")
    }
}

impl Error for EmptyVector {}

/// Growth was requested beyond [`max_cap`](super::Vector::max_cap), the most
/// elements a Vector of this type can ever hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The union of every failure a [`Vector`](super::Vector) operation can
/// report, for callers that propagate mixed operations with `?`.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum VectorError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`EmptyVector`].
    EmptyVector(EmptyVector),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
