//! Format implementations
//!
//! This module contains all format implementations that convert between
//! block trees and their text representations.

pub mod html;
pub mod json;
pub mod markup;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markup::MarkupFormat;
