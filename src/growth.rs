// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rank-parameterized growth recursion ("uparrow").
//!
//! `uparrow(a, b, n)` combines `a` with itself `b` times at rank `n`: the
//! accumulator is seeded with `a` on the first pass, and each later pass
//! combines the running accumulator with `a` at rank `n - 1`. Rank 0 is the
//! degenerate case where the combination step is plain addition, so rank 0
//! is iterated addition (multiplication), rank 1 iterated multiplication
//! (exponentiation), and so on up the arrow hierarchy.
//!
//! The suite evaluates the fixed call `uparrow(2, 2, 3)`, which is 4 (as any
//! `2 ↑ⁿ 2` is). Negative rank is outside the defined domain and is never
//! reached for `n >= 0`; `b = 0` leaves the accumulator at its initial 0.

use std::io::Write;

use crate::demo::Demo;
use crate::error::DemoResult;

/// Combine `a` with itself `b` times at rank `n`.
///
/// Deliberately naive: the recursion tree is the point of the demo. Grows
/// fast enough to overflow `i64` (or the stack) for modest inputs beyond
/// the fixed `(2, 2, 3)`; callers parameterizing this must bound their
/// arguments themselves.
pub fn uparrow(a: i64, b: i64, n: i64) -> i64 {
    let mut res = 0;
    for i in 0..b {
        if i == 0 {
            res = a;
        } else if n == 0 {
            res += a;
        } else {
            res = uparrow(res, a, n - 1);
        }
    }
    res
}

/// Demo wrapper: prints `starting`, then the value of `uparrow(2, 2, 3)`.
#[derive(Debug, Clone, Copy)]
pub struct UparrowDemo;

impl Demo for UparrowDemo {
    fn run(&self, out: &mut dyn Write) -> DemoResult<()> {
        writeln!(out, "starting")?;
        let res = uparrow(2, 2, 3);
        writeln!(out, "{}", res)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "uparrow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_input_is_four() {
        assert_eq!(uparrow(2, 2, 3), 4);
    }

    #[test]
    fn test_rank_zero_is_multiplication() {
        assert_eq!(uparrow(3, 4, 0), 12);
        assert_eq!(uparrow(7, 1, 0), 7);
    }

    #[test]
    fn test_rank_one_is_exponentiation() {
        assert_eq!(uparrow(3, 3, 1), 27);
        assert_eq!(uparrow(2, 10, 1), 1024);
    }

    #[test]
    fn test_rank_two_is_tetration() {
        // 2 ↑↑ 3 = 2^(2^2) = 16
        assert_eq!(uparrow(2, 3, 2), 16);
    }

    #[test]
    fn test_two_arrow_two_is_four_at_every_rank() {
        for n in 0..=5 {
            assert_eq!(uparrow(2, 2, n), 4);
        }
    }

    #[test]
    fn test_zero_height_yields_initial_accumulator() {
        assert_eq!(uparrow(5, 0, 2), 0);
    }

    #[test]
    fn test_demo_transcript() {
        let mut sink = Vec::new();
        UparrowDemo.run(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "starting\n4\n");
    }
}
