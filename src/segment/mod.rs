//! # Segment Module
//!
//! Splits route path templates into typed segments: literal text, named
//! parameters, globs and the API version position.
//!
//! The segment list is computed once per route at decoration time and shared
//! by every helper the route produces. Order always follows the template.

mod parser;
mod types;

pub use parser::{
    classify_segment, parse_template, strip_format_suffix, template_format, TemplateFormat,
    DYNAMIC_SIGIL, GLOB_MARKER, VERSION_PARAM,
};
pub use types::{dynamic_names, Segment, SegmentList, MAX_INLINE_SEGMENTS};
