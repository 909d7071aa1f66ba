// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Naive Fibonacci enumeration.
//!
//! Uses the shifted recurrence where both base cases return 1:
//! `fib(0) = fib(1) = 1`, `fib(n) = fib(n-1) + fib(n-2)`. The double
//! recursion is intentionally unmemoized; demonstrating the exponential
//! call tree is the point, so do not replace it with a table or an
//! iterative form.

use std::io::Write;

use crate::demo::Demo;
use crate::error::DemoResult;

/// Largest `n` the demo enumerates (inclusive).
pub const FIB_MAX_N: u32 = 15;

/// Shifted Fibonacci by naive double recursion.
///
/// Exponential in `n`; fine for the demo range, and `u64` holds the result
/// comfortably up to `n = 90` or so if anyone pushes past it.
pub fn fib(n: u32) -> u64 {
    if n == 0 || n == 1 {
        1
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// Demo wrapper: one `fib(<n>) = <value>` line for each n in 0..=15.
#[derive(Debug, Clone, Copy)]
pub struct FibonacciDemo;

impl Demo for FibonacciDemo {
    fn run(&self, out: &mut dyn Write) -> DemoResult<()> {
        for n in 0..=FIB_MAX_N {
            let result = fib(n);
            writeln!(out, "fib({}) = {}", n, result)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fib"
    }
}
