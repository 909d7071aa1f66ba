// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The demo seam: a common trait for the five runnable algorithms.
//!
//! Each demo is self-contained: it owns its (compiled-in) inputs and writes
//! its transcript to a caller-supplied sink. Keeping the sink abstract lets
//! the binary pass stdout while tests pass a `Vec<u8>` and assert on the
//! exact bytes produced.

use std::io::Write;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::bisect::SqrtBisection;
use crate::error::DemoResult;
use crate::fib::FibonacciDemo;
use crate::growth::UparrowDemo;
use crate::triples::{TripleReturnDemo, TripleSharedDemo};

/// A runnable demonstration.
///
/// Implementations are cheap value types; `run` is deterministic and may be
/// called repeatedly, producing byte-identical output each time.
pub trait Demo {
    /// Run the demo, writing its transcript to `out`.
    fn run(&self, out: &mut dyn Write) -> DemoResult<()>;

    /// Short name used in logs and listings.
    fn name(&self) -> &'static str;
}

/// The fixed set of demos, in suite order.
///
/// The strum derives give us the CLI-facing kebab-case names and iteration
/// over all demos for `algos all` / `algos list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DemoKind {
    Sqrt,
    Uparrow,
    Fib,
    Triple,
    TripleShared,
}

impl DemoKind {
    /// Construct the demo with its standard compiled-in inputs.
    pub fn demo(self) -> Box<dyn Demo> {
        match self {
            DemoKind::Sqrt => Box::new(SqrtBisection::standard()),
            DemoKind::Uparrow => Box::new(UparrowDemo),
            DemoKind::Fib => Box::new(FibonacciDemo),
            DemoKind::Triple => Box::new(TripleReturnDemo),
            DemoKind::TripleShared => Box::new(TripleSharedDemo),
        }
    }
}

/// Run every demo in suite order against the same sink.
///
/// Transcripts are concatenated with no separators; run boundaries go to the
/// tracing layer instead so the printed contracts stay untouched.
pub fn run_all(out: &mut dyn Write) -> DemoResult<()> {
    for kind in DemoKind::iter() {
        let demo = kind.demo();
        tracing::info!(demo = demo.name(), "running");
        demo.run(out)?;
    }
    Ok(())
}
