//! DepScope - dependency usage scanner for Angular and Node.js projects
//!
//! This crate finds where a named service or component is used in a source
//! tree: for Angular-style projects it locates classes that receive the
//! component through constructor injection and lists every call made through
//! the injected reference; for Node-style server projects it locates HTTP
//! route registrations. The result is a structured per-file report for a UI
//! or another tool to consume.
//!
//! The scanners are structural, not syntactic: they track balanced
//! delimiters and swept patterns over raw text instead of building a syntax
//! tree, trading occasional false positives for speed and tolerance of
//! half-written code.

pub mod analysis;
pub mod export;
pub mod parser;
pub mod project;
pub mod scan;
