//! BPMN extraction evaluation framework.
//!
//! # Overview
//!
//! Everything needed to score an extraction backend against hand-authored
//! ground truth:
//!
//! - [`Evaluator`] / [`MatchResult`]: greedy fuzzy matcher with
//!   precision/recall bookkeeping (the core).
//! - [`TestCase`] / [`builtin_cases`]: the fixed evaluation inputs.
//! - [`EvalHarness`] / [`CaseReport`]: the prompt → generate → parse →
//!   score loop with per-case error recovery.
//! - [`render_table`]: console report.
//!
//! # Example
//!
//! ```
//! use bpmn_eval::backends::StaticGenerator;
//! use bpmn_eval::eval::{builtin_cases, EvalHarness, Evaluator, render_table};
//!
//! let generator = StaticGenerator::new(r#"{"tasks": ["Approve Loan"]}"#);
//! let harness = EvalHarness::new(Box::new(generator), Evaluator::new(0.7));
//!
//! let reports = harness.run(&builtin_cases());
//! println!("{}", render_table(&reports));
//! ```

pub mod cases;
pub mod harness;
pub mod metrics;
pub mod report;

pub use cases::{builtin_cases, TestCase};
pub use harness::{CaseReport, EvalHarness};
pub use metrics::{Evaluator, MatchResult, DEFAULT_THRESHOLD};
pub use report::render_table;
