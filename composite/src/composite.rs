/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The three-variant composite value and its surface.

use std::fmt;
use std::slice;
use std::vec;

use serde::Deserialize;
use serde::Serialize;

/// The type of error for composite well-formedness checks.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CompositeError {
    /// An aggregate part is itself an aggregate.
    #[error("aggregate part {index} is a nested aggregate")]
    NestedAggregate {
        /// Position of the offending part.
        index: usize,
    },

    /// An aggregate part is the empty variant.
    #[error("aggregate part {index} is empty")]
    NonePart {
        /// Position of the offending part.
        index: usize,
    },
}

/// A value that represents zero, one, or many elements.
///
/// `Composite<T>` is a closed sum of three variant roles:
///
/// - [`Composite::None`]: no elements,
/// - [`Composite::Single`]: exactly one element,
/// - [`Composite::Aggregate`]: an ordered collection of parts, each
///   itself a composite.
///
/// A *well-formed* aggregate contains only `Single` parts — never the
/// empty variant, never a nested aggregate. The type does not forbid
/// ill-formed values (see [`Composite::validate`]); [`Composite::join`]
/// produces well-formed output from well-formed input and carries any
/// deeper structure through verbatim.
///
/// # Example
///
/// ```
/// use composite::Composite;
///
/// let c = Composite::aggregate(vec![
///     Composite::single("seven"),
///     Composite::single("eight"),
/// ]);
/// assert_eq!(c.len(), 2);
/// assert_eq!(c.to_string(), "[seven eight]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Composite<T> {
    /// Zero elements.
    None,

    /// Exactly one element.
    Single(T),

    /// An ordered collection of parts, each itself a composite.
    Aggregate(Vec<Composite<T>>),
}

impl<T> Composite<T> {
    /// The empty variant.
    pub fn none() -> Self {
        Composite::None
    }

    /// Wrap a value as a single element.
    pub fn single(value: T) -> Self {
        Composite::Single(value)
    }

    /// Wrap parts as an aggregate.
    pub fn aggregate(parts: Vec<Composite<T>>) -> Self {
        Composite::Aggregate(parts)
    }

    /// Is this the empty variant?
    pub fn is_none(&self) -> bool {
        matches!(self, Composite::None)
    }

    /// The number of slots this value contributes when joined:
    /// 0 for the empty variant, 1 for a single element, and the part
    /// count for an aggregate.
    ///
    /// Note that an aggregate with no parts has `len() == 0` but is
    /// *not* the empty variant.
    pub fn len(&self) -> usize {
        match self {
            Composite::None => 0,
            Composite::Single(_) => 1,
            Composite::Aggregate(parts) => parts.len(),
        }
    }

    /// Does this value contribute no slots when joined?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the immediate parts of this value: nothing for the
    /// empty variant, the value itself for a single element, and the
    /// parts in order for an aggregate.
    ///
    /// `iter().count()` always equals [`Composite::len`].
    pub fn iter(&self) -> Iter<'_, T> {
        let inner = match self {
            Composite::None => IterInner::Empty,
            Composite::Single(_) => IterInner::Single(Some(self)),
            Composite::Aggregate(parts) => IterInner::Aggregate(parts.iter()),
        };
        Iter { inner }
    }

    /// Map every leaf value, at any depth, preserving structure.
    ///
    /// # Example
    ///
    /// ```
    /// use composite::Composite;
    ///
    /// let c = Composite::aggregate(vec![
    ///     Composite::single(1),
    ///     Composite::single(2),
    /// ]);
    /// assert_eq!(
    ///     c.map(|n| n * 10),
    ///     Composite::aggregate(vec![
    ///         Composite::single(10),
    ///         Composite::single(20),
    ///     ])
    /// );
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Composite<U>
    where
        F: FnMut(T) -> U,
    {
        self.map_parts(&mut f)
    }

    fn map_parts<U, F>(self, f: &mut F) -> Composite<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Composite::None => Composite::None,
            Composite::Single(value) => Composite::Single(f(value)),
            Composite::Aggregate(parts) => {
                Composite::Aggregate(parts.into_iter().map(|part| part.map_parts(f)).collect())
            }
        }
    }

    /// Check the well-formedness invariant: every part of an aggregate
    /// must be a single element. Reports the position of the first
    /// offending part.
    ///
    /// The check is advisory. [`Composite::join`] accepts ill-formed
    /// values and carries their structure through rather than
    /// rejecting them.
    ///
    /// # Example
    ///
    /// ```
    /// use composite::Composite;
    ///
    /// let ok = Composite::aggregate(vec![Composite::single(1)]);
    /// assert!(ok.validate().is_ok());
    ///
    /// let bad: Composite<i32> =
    ///     Composite::aggregate(vec![Composite::None]);
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CompositeError> {
        if let Composite::Aggregate(parts) = self {
            for (index, part) in parts.iter().enumerate() {
                match part {
                    Composite::Single(_) => {}
                    Composite::None => return Err(CompositeError::NonePart { index }),
                    Composite::Aggregate(_) => {
                        return Err(CompositeError::NestedAggregate { index });
                    }
                }
            }
        }
        Ok(())
    }
}

impl<T> Default for Composite<T> {
    /// The empty variant, the identity for join.
    fn default() -> Self {
        Composite::None
    }
}

impl<T> From<T> for Composite<T> {
    fn from(value: T) -> Self {
        Composite::Single(value)
    }
}

impl<T> From<Vec<Composite<T>>> for Composite<T> {
    fn from(parts: Vec<Composite<T>>) -> Self {
        Composite::Aggregate(parts)
    }
}

impl<T: fmt::Display> fmt::Display for Composite<T> {
    /// Renders the empty variant as `NONE`, a single element as the
    /// bare value, and an aggregate as its space-separated parts in
    /// square brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Composite::None => f.write_str("NONE"),
            Composite::Single(value) => write!(f, "{}", value),
            Composite::Aggregate(parts) => {
                f.write_str("[")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", part)?;
                }
                f.write_str("]")
            }
        }
    }
}

// Part iterators. Hand-rolled so the item count is exact and no
// intermediate collection is built.

/// Borrowing iterator over a composite's immediate parts.
///
/// Returned by [`Composite::iter`].
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

enum IterInner<'a, T> {
    Empty,
    Single(Option<&'a Composite<T>>),
    Aggregate(slice::Iter<'a, Composite<T>>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Composite<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Empty => None,
            IterInner::Single(slot) => slot.take(),
            IterInner::Aggregate(parts) => parts.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match &self.inner {
            IterInner::Empty => 0,
            IterInner::Single(slot) => slot.is_some() as usize,
            IterInner::Aggregate(parts) => parts.len(),
        };
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a composite's immediate parts.
///
/// Returned by [`Composite`]'s [`IntoIterator`] impl.
pub struct IntoIter<T> {
    inner: IntoIterInner<T>,
}

enum IntoIterInner<T> {
    Empty,
    Single(Option<Composite<T>>),
    Aggregate(vec::IntoIter<Composite<T>>),
}

impl<T> Iterator for IntoIter<T> {
    type Item = Composite<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Empty => None,
            IntoIterInner::Single(slot) => slot.take(),
            IntoIterInner::Aggregate(parts) => parts.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match &self.inner {
            IntoIterInner::Empty => 0,
            IntoIterInner::Single(slot) => slot.is_some() as usize,
            IntoIterInner::Aggregate(parts) => parts.len(),
        };
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Composite<T> {
    type Item = Composite<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let inner = match self {
            Composite::None => IntoIterInner::Empty,
            single @ Composite::Single(_) => IntoIterInner::Single(Some(single)),
            Composite::Aggregate(parts) => IntoIterInner::Aggregate(parts.into_iter()),
        };
        IntoIter { inner }
    }
}

impl<'a, T> IntoIterator for &'a Composite<T> {
    type Item = &'a Composite<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Tests
