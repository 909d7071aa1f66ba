// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pedagogical algorithm demo suite.
//!
//! Five independent, fixed-input demonstrations of basic numerical and
//! recursive algorithms, exposed as a library plus one `algos` binary with
//! a subcommand per demo:
//!
//! - **sqrt** — bisection search narrowing a bracketing interval around √2
//!   until it is tighter than 1e-3, printing each guess as it goes.
//! - **uparrow** — rank-parameterized growth recursion (the arrow hierarchy:
//!   addition, multiplication, exponentiation, ...), evaluated at (2, 2, 3).
//! - **fib** — naive doubly-recursive Fibonacci over the shifted recurrence
//!   (both base cases return 1), enumerated for n = 0..=15.
//! - **triple** — exhaustive lexicographic search for a Pythagorean triple
//!   with components up to 13, reported as an existence flag.
//! - **triple-shared** — the same search reporting through a mutable
//!   out-parameter instead of a return value, as a contrast in styles.
//!
//! # Architecture
//!
//! Each demo implements the [`Demo`] trait, writing its transcript to a
//! caller-supplied `io::Write` sink. The binary passes stdout; the test
//! suite passes in-memory buffers and asserts exact bytes. [`DemoKind`]
//! is the registry tying CLI names to demos.
//!
//! All inputs are compiled in and every transcript is deterministic, so
//! repeated runs are byte-identical. The exponential shapes (unmemoized
//! Fibonacci, the uparrow recursion tree) are intentional and must not be
//! optimized away.

pub mod bisect;
pub mod demo;
pub mod error;
pub mod fib;
pub mod growth;
pub mod triples;

// Re-export commonly used types
pub use bisect::SqrtBisection;
pub use demo::{run_all, Demo, DemoKind};
pub use error::{DemoError, DemoResult};
pub use fib::fib;
pub use growth::uparrow;
pub use triples::{find_triple, find_triple_into, TripleSlots};
