//! Prelude module for convenient imports.
//!
//! ```ignore
//! use stubber::prelude::*;
//! ```

// Schema types
pub use stubber_schema::{
    FunctionSpec, OrderedMap, ParseError, SchemaError, SchemaRecord, TemplateParam, Visibility,
    parse_schema, parse_schema_file,
};

// Codegen types
pub use stubber_codegen::{
    ClassAssembler, CodegenError, Cpp, DeclarationEmitter, GeneratedFile, Generator,
    TargetLanguage, TypeResolver, normalize,
};

// Build types
pub use stubber_build::{BuildConfig, BuildError, BuildReport, Builder, Rejection};
