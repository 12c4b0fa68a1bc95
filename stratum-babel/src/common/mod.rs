//! Contains logic shared by several formats: importing element trees and
//! normalizing parsed outlines.

pub mod import;
pub mod normalize;
