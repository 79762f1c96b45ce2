// Resume extraction: document decoding, heuristic field parsing, upload endpoint.
// Every field extractor falls back to a fixed value; parsing never fails on content.

pub mod document;
pub mod fields;
pub mod handlers;
pub mod parser;
pub mod sections;
pub mod validators;
