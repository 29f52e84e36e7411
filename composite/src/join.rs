/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The join (collapse) operation over sequences of composites.
//!
//! Join implements the composite pattern's canonicalization step: a
//! sequence of parts collapses to the empty variant, to its sole
//! surviving part, or to one flat aggregate of every surviving slot.
//!
//! The algorithm is two-pass. The first pass borrows the input to
//! classify it (zero, one, or many surviving parts) and to compute the
//! exact slot count of the result; the second pass consumes the input
//! into a single exact-capacity allocation. Nothing is cloned at any
//! point: the sole-survivor and all-empty outcomes move a value out,
//! and the many outcome moves every surviving part or spliced child
//! into the result.

use crate::Composite;
use crate::Monoid;
use crate::Semigroup;

// Classification outcome of the sizing pass. Only the sole survivor's
// position matters.
enum Survivors {
    Zero,
    One(usize),
    Many,
}

impl<T> Composite<T> {
    /// Collapse `parts` into the simplest equivalent composite.
    ///
    /// - Every part empty (or no parts at all): returns
    ///   [`Composite::None`].
    /// - Exactly one non-empty part: returns that part unchanged, by
    ///   move. An aggregate is passed through as-is here, not
    ///   unwrapped, even though it would be spliced on the many path.
    /// - Two or more non-empty parts: returns a new aggregate holding,
    ///   in original order, each non-aggregate part as one slot and
    ///   each aggregate part's children spliced in place.
    ///
    /// Splicing is single-level: children of an input aggregate are
    /// carried through verbatim, whatever their shape.
    ///
    /// # Example
    ///
    /// ```
    /// use composite::Composite;
    ///
    /// let joined = Composite::join(vec![
    ///     Composite::None,
    ///     Composite::single("one"),
    ///     Composite::aggregate(vec![
    ///         Composite::single("two"),
    ///         Composite::single("three"),
    ///     ]),
    ///     Composite::None,
    /// ]);
    /// assert_eq!(joined.to_string(), "[one two three]");
    ///
    /// // A sole survivor passes through unchanged.
    /// let sole = Composite::join(vec![
    ///     Composite::None,
    ///     Composite::single("one"),
    /// ]);
    /// assert_eq!(sole, Composite::single("one"));
    /// ```
    pub fn join(mut parts: Vec<Self>) -> Self {
        // Pass 1: classify and size.
        let mut survivors = Survivors::Zero;
        let mut slots = 0;
        for (index, part) in parts.iter().enumerate() {
            if part.is_none() {
                continue;
            }
            survivors = match survivors {
                Survivors::Zero => Survivors::One(index),
                Survivors::One(_) | Survivors::Many => Survivors::Many,
            };
            slots += part.len();
        }

        match survivors {
            Survivors::Zero => Composite::None,
            Survivors::One(index) => parts.swap_remove(index),
            Survivors::Many => {
                // Pass 2: flatten into an exact-capacity aggregate.
                let mut out = Vec::with_capacity(slots);
                for part in parts {
                    match part {
                        Composite::None => {}
                        Composite::Aggregate(children) => out.extend(children),
                        single => out.push(single),
                    }
                }
                Composite::Aggregate(out)
            }
        }
    }
}

impl<T> FromIterator<Composite<T>> for Composite<T> {
    /// Collects the sequence and joins it; `parts.collect()` is the
    /// iterator-pipeline form of [`Composite::join`].
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Composite<T>>,
    {
        Composite::join(iter.into_iter().collect())
    }
}

impl<T: Clone> Semigroup for Composite<T> {
    /// Binary join. Associativity holds because splicing is
    /// single-level and children are carried verbatim under either
    /// grouping.
    fn combine(&self, other: &Self) -> Self {
        Composite::join(vec![self.clone(), other.clone()])
    }
}

impl<T: Clone> Monoid for Composite<T> {
    /// The empty variant: joining with it passes the other value
    /// through.
    fn empty() -> Self {
        Composite::None
    }

    /// Specialized to one n-ary join rather than a binary fold; the
    /// two agree, and the n-ary form sizes its result exactly.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Composite::join(iter.into_iter().collect())
    }
}

// Tests
