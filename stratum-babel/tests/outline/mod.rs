//! Outline format tests
//!
//! Parsing, normalization and serialization of indented outline text.

mod parse;
mod properties;
mod roundtrip;
