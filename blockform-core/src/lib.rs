//! Block tree data model for blockform
//!
//!     This crate holds the types shared by every blockform conversion: the block node tree an
//!     editor consumes, the identifiers attached to each node, and the tag policy table that
//!     overrides structural inference for dynamic tags.
//!
//!     It is a pure lib. Parsing HTML and producing text live in blockform-babel; nothing here
//!     reads files or touches the environment.
//!
//!     The file structure :
//!     .
//!     ├── ast.rs                  # BlockNode, BlockDocument, ContentType
//!     ├── ast
//!     │   ├── error.rs            # invariant violations
//!     │   ├── ids.rs              # BlockId and id generators
//!     │   └── node.rs             # BlockNode and constructors
//!     ├── policy.rs               # TagPolicyTable
//!     ├── tags.rs                 # void and container tag sets
//!     └── testing.rs              # fluent assertions over block trees
//!
pub mod ast;
pub mod policy;
pub mod tags;
pub mod testing;

pub use ast::{
    Attributes, BlockDocument, BlockError, BlockId, BlockKind, BlockNode, ContentType,
    IdGenerator, LegacyAttributes, SequentialIds, UuidIds,
};
pub use policy::{ContentModel, TagPolicy, TagPolicyTable};
