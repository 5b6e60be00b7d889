//! Manifest parser layer
//! - traits.rs: Parser trait definition
//! - requirements_txt.rs: requirements.txt parser (PEP 508 entries)

pub mod requirements_txt;
pub mod traits;

pub use requirements_txt::RequirementsTxtParser;
pub use traits::{ParseError, Parser};
