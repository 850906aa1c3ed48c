//! Email-safe table HTML, generated from and parsed back into the document tree.

pub mod entities;
mod generator;
pub mod icons;
pub mod parser;
pub mod style;

pub use generator::{generate, generate_document};
pub use parser::{parse, ParsedDocument};

/// Which values the generator renders for mapped fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// The literal field values, as stored or as resolved for one record.
    #[default]
    Literal,
    /// `{{column}}` placeholders wherever a field is mapped.
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateOptions {
    /// Produce an "editable HTML" export: text can be edited in place in a
    /// browser and links do not navigate.
    pub editable: bool,
    pub mode: RenderMode,
}
