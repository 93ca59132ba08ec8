//! Core types of the function type system

use std::fmt;

/// The three kinds a function parameter or result can have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionType {
    /// Any JSON value, or `Nothing`
    ValueType,
    /// Boolean result of a test or logical expression
    LogicalType,
    /// A nodelist selected by a query
    NodesType,
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FunctionType::ValueType => "ValueType",
            FunctionType::LogicalType => "LogicalType",
            FunctionType::NodesType => "NodesType",
        })
    }
}

/// Built-in function identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionName {
    Length,
    Count,
    Match,
    Search,
    Value,
}

impl FunctionName {
    /// Resolve a function identifier; user-defined functions are not supported
    #[must_use]
    pub fn from_identifier(name: &str) -> Option<Self> {
        match name {
            "length" => Some(FunctionName::Length),
            "count" => Some(FunctionName::Count),
            "match" => Some(FunctionName::Match),
            "search" => Some(FunctionName::Search),
            "value" => Some(FunctionName::Value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionName::Length => "length",
            FunctionName::Count => "count",
            FunctionName::Match => "match",
            FunctionName::Search => "search",
            FunctionName::Value => "value",
        }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected parameter kinds and result kind of a function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: FunctionName,
    /// Expected parameter types in order
    pub parameter_types: &'static [FunctionType],
    pub return_type: FunctionType,
}

impl FunctionSignature {
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}
