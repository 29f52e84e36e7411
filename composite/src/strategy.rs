/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for [`Composite`] values.
//!
//! These strategies are used in `proptest`-based tests to construct
//! randomized composites for testing the join algorithm and the
//! monoid laws.
//!
//! [`gen_composite(depth)`](gen_composite) generates structurally
//! diverse values of bounded depth, including ill-formed ones (empty
//! variants and nested aggregates inside an aggregate), since join
//! must carry those through verbatim. The other generators restrict
//! the shape where a property needs it.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::Composite;

/// Generates an arbitrary composite of bounded depth.
///
/// Leaves are the empty variant or a single element; aggregates hold
/// up to four parts drawn recursively, so the output may be
/// ill-formed on purpose.
pub fn gen_composite(depth: u32) -> impl Strategy<Value = Composite<u32>> {
    let leaf = prop_oneof![
        Just(Composite::None),
        any::<u32>().prop_map(Composite::Single),
    ];
    leaf.prop_recursive(depth, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Composite::Aggregate)
    })
}

/// Generates a composite that is not the empty variant, for
/// properties about the sole surviving part.
pub fn gen_survivor(depth: u32) -> impl Strategy<Value = Composite<u32>> {
    gen_composite(depth).prop_filter("survivor must not be the empty variant", |c| !c.is_none())
}

/// Generates a well-formed composite: the empty variant, a single
/// element, or a flat aggregate of up to `max_len` single elements.
pub fn gen_well_formed(max_len: usize) -> impl Strategy<Value = Composite<u32>> {
    prop_oneof![
        Just(Composite::None),
        any::<u32>().prop_map(Composite::Single),
        prop::collection::vec(any::<u32>().prop_map(Composite::Single), 0..=max_len)
            .prop_map(Composite::Aggregate),
    ]
}
