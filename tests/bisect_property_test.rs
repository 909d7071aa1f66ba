// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests for the bisection search.
//!
//! Restricted to squares >= 1: the demo's initial interval is
//! `[0, square]`, which only brackets the root when `square >= 1`
//! (for `square < 1` the root lies above the interval, and the fixed
//! demo never goes there).

use algo_demos::bisect::SqrtBisection;
use proptest::prelude::*;

proptest! {
    #[test]
    fn final_guess_is_within_precision_of_the_root(
        square in 1.0_f64..10_000.0,
        precision in 1e-6_f64..0.1,
    ) {
        let mut sink = Vec::new();
        let result = SqrtBisection::new(square, precision)
            .approximate(&mut sink)
            .unwrap();

        prop_assert!(result.lower_bound <= result.guess);
        prop_assert!(result.guess <= result.upper_bound);
        prop_assert!(result.upper_bound - result.lower_bound <= precision);
        prop_assert!((result.guess - square.sqrt()).abs() <= precision);
    }

    #[test]
    fn iteration_count_is_geometric(
        square in 1.0_f64..10_000.0,
        precision in 1e-6_f64..0.1,
    ) {
        let mut sink = Vec::new();
        let result = SqrtBisection::new(square, precision)
            .approximate(&mut sink)
            .unwrap();

        // the first iteration leaves the interval width unchanged (the seed
        // guess is the lower bound); every later iteration halves it
        let bound = (square / precision).log2().ceil() as usize + 2;
        prop_assert!(result.iterations <= bound);
    }
}
