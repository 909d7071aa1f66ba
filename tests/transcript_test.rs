// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact-output tests for every demo transcript.
//!
//! The suite's inputs are compiled in and every value printed is either an
//! integer or a dyadic fraction, so the expected transcripts can be written
//! down literally and compared byte for byte.

use algo_demos::demo::{run_all, Demo, DemoKind};
use strum::IntoEnumIterator;

fn render(kind: DemoKind) -> String {
    let mut sink = Vec::new();
    kind.demo().run(&mut sink).unwrap();
    String::from_utf8(sink).unwrap()
}

const SQRT_TRANSCRIPT: &str = "\
Guessing: 0...  That was too small
Now I know the answer is between 0 and 2
Guessing: 1...  That was too small
Now I know the answer is between 1 and 2
Guessing: 1.5...  That was too big
Now I know the answer is between 1 and 1.5
Guessing: 1.25...  That was too small
Now I know the answer is between 1.25 and 1.5
Guessing: 1.375...  That was too small
Now I know the answer is between 1.375 and 1.5
Guessing: 1.4375...  That was too big
Now I know the answer is between 1.375 and 1.4375
Guessing: 1.40625...  That was too small
Now I know the answer is between 1.40625 and 1.4375
Guessing: 1.421875...  That was too big
Now I know the answer is between 1.40625 and 1.421875
Guessing: 1.4140625...  That was too small
Now I know the answer is between 1.4140625 and 1.421875
Guessing: 1.41796875...  That was too big
Now I know the answer is between 1.4140625 and 1.41796875
Guessing: 1.416015625...  That was too big
Now I know the answer is between 1.4140625 and 1.416015625
Guessing: 1.4150390625...  That was too big
Now I know the answer is between 1.4140625 and 1.4150390625
The square root of 2 is about 1.41455078125
";

#[test]
fn test_sqrt_transcript() {
    assert_eq!(render(DemoKind::Sqrt), SQRT_TRANSCRIPT);
}

#[test]
fn test_uparrow_transcript() {
    assert_eq!(render(DemoKind::Uparrow), "starting\n4\n");
}

#[test]
fn test_fib_transcript() {
    let expected = "\
fib(0) = 1
fib(1) = 1
fib(2) = 2
fib(3) = 3
fib(4) = 5
fib(5) = 8
fib(6) = 13
fib(7) = 21
fib(8) = 34
fib(9) = 55
fib(10) = 89
fib(11) = 144
fib(12) = 233
fib(13) = 377
fib(14) = 610
fib(15) = 987
";
    assert_eq!(render(DemoKind::Fib), expected);
}

#[test]
fn test_triple_transcripts() {
    assert_eq!(render(DemoKind::Triple), "Triple exists? 1\n");
    assert_eq!(render(DemoKind::TripleShared), "Triple: 3 4 5\n");
}

#[test]
fn test_every_demo_is_idempotent() {
    for kind in DemoKind::iter() {
        assert_eq!(render(kind), render(kind), "{kind} differed across runs");
    }
}

#[test]
fn test_run_all_concatenates_in_suite_order() {
    let mut sink = Vec::new();
    run_all(&mut sink).unwrap();
    let expected: String = DemoKind::iter().map(render).collect();
    assert_eq!(String::from_utf8(sink).unwrap(), expected);
}
