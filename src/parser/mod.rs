// GlyphPipe DSL Parser Module

pub mod ast;
pub mod bindings;
pub mod lexer;
pub mod pipeline;
pub mod sort;

// Public API re-exports
pub use ast::{GlyphBindings, MapSpec, SortOrder, SortSpec};
pub use pipeline::parse_map_spec;
