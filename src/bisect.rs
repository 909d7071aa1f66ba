// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square-root approximation by bisection.
//!
//! The search keeps a bracketing interval `[lower_bound, upper_bound]` and a
//! current guess, halving the interval each iteration until its width is no
//! larger than the precision threshold. Each guess is printed together with
//! a too-big/too-small classification and the narrowed interval.
//!
//! # Termination
//!
//! The interval halves every iteration, so for any positive square and
//! positive precision the loop terminates after a finite, deterministic
//! number of steps. Two degenerate cases fall straight through the loop:
//! `precision >= square` (the initial interval already satisfies the exit
//! test) and `square = 0` (empty interval).

use std::io::Write;

use strum_macros::Display;

use crate::demo::Demo;
use crate::error::DemoResult;

/// Verdict on one guess: which side of the target its square landed on.
///
/// A guess whose square exactly equals the target classifies as `TooSmall`;
/// it then becomes the lower bound and the search tightens from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Classification {
    #[strum(serialize = "big")]
    TooBig,
    #[strum(serialize = "small")]
    TooSmall,
}

/// Final state of a bisection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximation {
    /// The approximate square root.
    pub guess: f64,
    /// Bracketing interval at exit; its width is at most the precision.
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Number of loop iterations executed.
    pub iterations: usize,
}

/// Bisection search for the square root of `square`.
#[derive(Debug, Clone, Copy)]
pub struct SqrtBisection {
    pub square: f64,
    pub precision: f64,
}

impl SqrtBisection {
    /// The suite's compiled-in inputs: approximate √2 to within 1e-3.
    pub fn standard() -> Self {
        Self {
            square: 2.0,
            precision: 1e-3,
        }
    }

    pub fn new(square: f64, precision: f64) -> Self {
        Self { square, precision }
    }

    /// Run the bisection, writing the guess-by-guess transcript to `out`.
    ///
    /// Invariant throughout: `lower_bound <= guess <= upper_bound`. When the
    /// guess is too big it becomes the new upper bound and the next guess is
    /// the midpoint of the old guess and the lower bound; otherwise it
    /// becomes the new lower bound and the next guess is the midpoint of the
    /// old guess and the upper bound.
    pub fn approximate(&self, out: &mut dyn Write) -> DemoResult<Approximation> {
        let mut lower_bound = 0.0_f64;
        let mut upper_bound = self.square;
        let mut guess = lower_bound;
        let mut iterations = 0_usize;

        while upper_bound - lower_bound > self.precision {
            iterations += 1;
            let classification = if guess * guess > self.square {
                Classification::TooBig
            } else {
                Classification::TooSmall
            };
            writeln!(out, "Guessing: {}...  That was too {}", guess, classification)?;
            match classification {
                Classification::TooBig => {
                    upper_bound = guess;
                    guess = (guess + lower_bound) / 2.0;
                }
                Classification::TooSmall => {
                    lower_bound = guess;
                    guess = (guess + upper_bound) / 2.0;
                }
            }
            writeln!(
                out,
                "Now I know the answer is between {} and {}",
                lower_bound, upper_bound
            )?;
        }
        writeln!(
            out,
            "The square root of {} is about {}",
            self.square, guess
        )?;

        tracing::debug!(square = self.square, iterations, guess, "bisection finished");
        Ok(Approximation {
            guess,
            lower_bound,
            upper_bound,
            iterations,
        })
    }
}

impl Demo for SqrtBisection {
    fn run(&self, out: &mut dyn Write) -> DemoResult<()> {
        self.approximate(out)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sqrt"
    }
}
