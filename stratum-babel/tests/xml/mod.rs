//! XML import tests

mod import;
