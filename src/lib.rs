//! # bpmn-eval
//!
//! Evaluation harness for LLM-based BPMN element extraction.
//!
//! Measures how well a model recovers BPMN elements (tasks, gateways,
//! events) from short natural-language process descriptions, by fuzzy-
//! matching extracted labels against hand-authored ground truth and
//! reporting precision/recall per test case.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bpmn_eval::backends::OllamaGenerator;
//! use bpmn_eval::eval::{builtin_cases, EvalHarness, Evaluator, render_table};
//!
//! let generator = OllamaGenerator::new().with_model("llama3");
//! let harness = EvalHarness::new(Box::new(generator), Evaluator::new(0.7));
//!
//! let reports = harness.run(&builtin_cases());
//! print!("{}", render_table(&reports));
//! ```
//!
//! ## Scoring
//!
//! Matching is greedy and order-dependent: each extracted label consumes
//! the first not-yet-matched ground-truth label whose case-insensitive
//! similarity ratio (Ratcliff/Obershelp matching blocks, as in Python's
//! `difflib`) meets the threshold. See [`eval::Evaluator`] for the exact
//! contract and [`similarity`] for the ratio definition.
//!
//! ## Design
//!
//! - **Total core**: the matcher and metrics never fail; errors only
//!   exist at the collaborator boundary (generation, parsing).
//! - **Narrow backend seam**: the harness depends on the
//!   [`backends::Generator`] trait only, so tests run against canned
//!   replies with no model server.
//! - **Per-case recovery**: a backend or parse failure degrades that
//!   case to an empty extraction; the run always produces a full report.

#![warn(missing_docs)]

pub mod backends;
mod error;
pub mod eval;
pub mod extraction;
pub mod prompt;
pub mod similarity;

pub use error::{Error, Result};
pub use eval::{builtin_cases, CaseReport, EvalHarness, Evaluator, MatchResult, TestCase};
pub use extraction::{parse_extraction, ExtractedElements};
pub use prompt::{element_schema, PromptBuilder};
pub use similarity::{ratio, similarity_match};
