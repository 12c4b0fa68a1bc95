//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the Node tree and various text representations.

pub mod html;
pub mod json;
pub mod outline;
pub mod treeviz;
pub mod xml;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use outline::OutlineFormat;
pub use treeviz::{TreevizFormat, TreevizOptions};
pub use xml::XmlFormat;
