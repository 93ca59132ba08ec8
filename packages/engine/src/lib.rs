//! # Nodepath engine
//!
//! Path-expression engine over JSON-shaped documents: a lexer, a recursive-descent
//! parser producing an immutable AST, and a tree-walking evaluator with a filter
//! sub-language, built-in functions and an always-on execution limiter.
//!
//! ## Pipeline
//!
//! `query text -> tokens -> Query AST -> (document, options) -> nodelist`
//!
//! The AST is document-agnostic and reusable. Everything mutable during an
//! evaluation (visit counter, regex cache, cycle sets) belongs to that one call.
//!
//! ## Usage
//!
//! ```
//! use nodepath_engine::{CoreJsonPathEvaluator, JsonPathParser, QueryOptions};
//! use serde_json::json;
//!
//! let doc = json!({"items": [{"id": 1, "tags": ["a"]}, {"id": 2, "tags": []}]});
//! let query = JsonPathParser::compile("$.items[?length(@.tags) > 0].id").unwrap();
//!
//! let ids: Vec<_> = CoreJsonPathEvaluator::evaluate(&query, &doc, &QueryOptions::default())
//!     .unwrap()
//!     .into_iter()
//!     .map(|node| node.into_value().clone())
//!     .collect();
//! assert_eq!(ids, vec![json!(1)]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
pub mod compiler;
pub mod config;
pub mod core_evaluator;
pub mod document;
pub mod error;
pub mod filter_parser;
pub mod functions;
pub mod normalized_paths;
pub mod selector_parser;
pub mod tokenizer;
pub mod tokens;
pub mod type_system;

pub use self::{
    ast::Query,
    compiler::JsonPathParser,
    config::{ConfigurationError, QueryOptions, Validator},
    core_evaluator::{CoreJsonPathEvaluator, EvalNode},
    document::{JsonNode, NodeKind, SharedValue},
    error::{ErrorKind, JsonPathError, JsonPathResult, LimitKind},
    normalized_paths::{NormalizedPath, PathElement, format_path},
};
