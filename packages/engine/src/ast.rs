//! Path-expression Abstract Syntax Tree (AST) definitions
//!
//! The tree is immutable once built, owns all of its children and holds no
//! reference into any document, so one compiled query can be evaluated against
//! many documents (and shared across threads).

use crate::type_system::FunctionName;

/// Query identifier the segments are applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootIdentifier {
    /// Document root (`$`)
    Root,
    /// Current filter node (`@`), only valid inside filter expressions
    Current,
}

/// Parsed query: an identifier followed by zero or more segments
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub root: RootIdentifier,
    pub segments: Vec<Segment>,
}

/// Query segment applied to every node of the running nodelist
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `.name`, `.*` or `[...]`: selectors applied to each input node
    Child {
        /// Applied in declared order, results concatenated
        selectors: Vec<Selector>,
    },
    /// `..name`, `..*` or `..[...]`: selectors applied to each input node and all its descendants
    Descendant {
        /// Applied in declared order at every visited node
        selectors: Vec<Selector>,
    },
}

/// Individual selector inside a segment
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Member lookup by exact name
    Name {
        /// Decoded member name
        name: String,
    },
    /// All array elements or object member values
    Wildcard,
    /// Array element by position (negative counts from the end)
    Index {
        /// Index within the I-JSON integer range
        index: i64,
    },
    /// Array slice (`[start:end:step]`)
    Slice {
        /// Start position (default depends on step sign)
        start: Option<i64>,
        /// End position, exclusive (default depends on step sign)
        end: Option<i64>,
        /// Step (default 1, zero selects nothing)
        step: Option<i64>,
    },
    /// Children for which the logical expression holds
    Filter {
        /// Predicate evaluated with each child as `@`
        expression: LogicalExpr,
    },
}

impl Segment {
    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &[Selector] {
        match self {
            Segment::Child { selectors } | Segment::Descendant { selectors } => selectors,
        }
    }
}

/// Filter-expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalExpr {
    /// True when any operand is true
    Or {
        operands: Vec<LogicalExpr>,
    },
    /// True when every operand is true
    And {
        operands: Vec<LogicalExpr>,
    },
    /// Logical negation
    Not {
        operand: Box<LogicalExpr>,
    },
    /// Comparison of two singular operands
    Comparison {
        left: Comparable,
        op: ComparisonOp,
        right: Comparable,
    },
    /// Existence test: true when the query selects at least one node
    Test {
        query: Query,
    },
    /// Function whose result is used as a boolean
    Function(FunctionCall),
}

/// Operand of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    Literal {
        value: Literal,
    },
    SingularQuery(SingularQuery),
    /// Value-returning function
    Function(FunctionCall),
}

/// Query restricted to name and index selectors, yielding at most one node
#[derive(Debug, Clone, PartialEq)]
pub struct SingularQuery {
    pub root: RootIdentifier,
    pub segments: Vec<SingularSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SingularSegment {
    Name(String),
    Index(i64),
}

/// Filter literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// Comparison operators for filter expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
}

/// Built-in function application
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: FunctionName,
    pub args: Vec<FunctionArg>,
}

/// Function argument, already checked against the function's signature
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArg {
    Literal(Literal),
    /// Singular query passed where a value is expected
    SingularQuery(SingularQuery),
    /// Unrestricted query passed where a nodelist is expected
    Query(Query),
    /// Nested value-returning function call
    Function(FunctionCall),
}

impl Query {
    /// Narrow to a singular query when every segment is a single name or index child selector
    #[must_use]
    pub fn to_singular(&self) -> Option<SingularQuery> {
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Child { selectors } if selectors.len() == 1 => match &selectors[0] {
                    Selector::Name { name } => Some(SingularSegment::Name(name.clone())),
                    Selector::Index { index } => Some(SingularSegment::Index(*index)),
                    _ => None,
                },
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        Some(SingularQuery {
            root: self.root,
            segments,
        })
    }

    /// Whether the query can select at most one node
    #[inline]
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.to_singular().is_some()
    }
}
