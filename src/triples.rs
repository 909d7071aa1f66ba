// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive Pythagorean-triple search, in two deliberately contrasted
//! styles.
//!
//! Both searches enumerate `(a, b, c)` with each component in `1..=max`, in
//! ascending lexicographic order, testing `a² + b² = c²` and short-circuiting
//! on the first match. They differ only in how the result leaves the
//! function:
//!
//! - [`find_triple`] returns an existence flag, the ordinary way.
//! - [`find_triple_into`] writes the first match into a caller-owned
//!   [`TripleSlots`] passed by mutable reference and returns nothing. This
//!   reproduces an output-via-shared-state style as a contrast case, scoped
//!   to an explicit out-parameter rather than process globals so tests can
//!   observe that the slots are written exactly once, or not at all.
//!
//! The lexicographic order is part of the contract: for `max = 13` the first
//! match is (3, 4, 5).

use std::io::Write;

use crate::demo::Demo;
use crate::error::DemoResult;

/// The suite's compiled-in search bound.
pub const STANDARD_MAX: u32 = 13;

/// Does any Pythagorean triple exist with all components in `1..=max`?
///
/// Cubic in `max` by design; no symmetry pruning, no early `c` cutoff.
pub fn find_triple(max: u32) -> bool {
    for a in 1..=max {
        for b in 1..=max {
            for c in 1..=max {
                if a * a + b * b == c * c {
                    return true;
                }
            }
        }
    }
    false
}

/// Out-parameter container for the shared-state search variant.
///
/// Starts at (0, 0, 0); [`find_triple_into`] overwrites it at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripleSlots {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl TripleSlots {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Same enumeration as [`find_triple`], but the first match is written into
/// `slots` instead of being returned. `slots` is untouched when no triple
/// exists within the bound.
pub fn find_triple_into(max: u32, slots: &mut TripleSlots) {
    for a in 1..=max {
        for b in 1..=max {
            for c in 1..=max {
                if a * a + b * b == c * c {
                    slots.a = a;
                    slots.b = b;
                    slots.c = c;
                    return;
                }
            }
        }
    }
}

/// Demo wrapper for the return-value style: prints the existence flag as 0/1.
#[derive(Debug, Clone, Copy)]
pub struct TripleReturnDemo;

impl Demo for TripleReturnDemo {
    fn run(&self, out: &mut dyn Write) -> DemoResult<()> {
        let triple_exists = find_triple(STANDARD_MAX);
        writeln!(out, "Triple exists? {}", u32::from(triple_exists))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "triple"
    }
}

/// Demo wrapper for the shared-state style: prints the slot contents.
#[derive(Debug, Clone, Copy)]
pub struct TripleSharedDemo;

impl Demo for TripleSharedDemo {
    fn run(&self, out: &mut dyn Write) -> DemoResult<()> {
        let mut slots = TripleSlots::new();
        find_triple_into(STANDARD_MAX, &mut slots);
        writeln!(out, "Triple: {} {} {}", slots.a, slots.b, slots.c)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "triple-shared"
    }
}
