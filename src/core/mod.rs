//! Core analysis engine.
//!
//! The pipeline runs strictly one direction, one file at a time:
//!
//! 1. `file_scanner` enumerates candidate `.tsx`/`.jsx` files
//! 2. `parsers::jsx` turns each file into an AST
//! 3. `hooks` locates recognized hook calls, using `free_idents` and
//!    `stable` to compute each callback's required dependencies
//! 4. `report` aggregates per-file results into an `AnalysisReport`

pub mod file_scanner;
pub mod free_idents;
pub mod hooks;
pub mod parsers;
pub mod report;
pub mod stable;
