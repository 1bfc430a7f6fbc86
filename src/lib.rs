//! Hookcheck - dependency-array checker for React hooks
//!
//! Hookcheck is a CLI tool and library for finding missing dependencies in
//! `useEffect`, `useCallback`, and `useMemo` calls across a TSX codebase.
//! It parses each component file, computes the free identifiers every hook
//! callback reads, exempts referentially stable names (state setters, refs,
//! runtime globals), and reports what the declared dependency array misses.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit codes, dispatch)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (parsing, extraction, diffing, scanning)
//! - `reporter`: Console report rendering

pub mod cli;
pub mod config;
pub mod core;
pub mod reporter;
