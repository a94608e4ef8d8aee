// Common utilities shared between macros
//
// This module contains:
// - parse_utils: `key = Type` attribute parsing

mod parse_utils;

pub use parse_utils::*;
