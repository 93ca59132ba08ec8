//! # Nodepath
//!
//! Query JSON-shaped documents with path expressions.
//!
//! ```
//! use nodepath::{QueryOptions, query_values};
//! use serde_json::json;
//!
//! let doc = json!({"store": {"book": [{"price": 8}, {"price": 12}]}});
//! let cheap = query_values("$.store.book[?@.price < 10]", &doc, &QueryOptions::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(cheap, vec![&json!({"price": 8})]);
//! ```
//!
//! Every entry point is a pure function of the query, the document and the
//! options. Syntax errors and exhausted budgets come back as `None`, or as a
//! [`JsonPathError`] when [`QueryOptions::throw_on_error`] is set.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

mod compiled;
mod node;
mod query;

pub use compiled::CompiledQuery;
pub use node::NodeWithPath;
pub use query::{compile, is_valid, parse, query_nodes, query_values, try_parse};

// Re-export the engine types callers need
pub use nodepath_engine::{
    ConfigurationError, ErrorKind, JsonNode, JsonPathError, JsonPathResult, LimitKind, NodeKind,
    NormalizedPath, PathElement, Query, QueryOptions, SharedValue, Validator, format_path,
};
