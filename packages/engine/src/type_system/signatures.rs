//! Signatures of the built-in functions

use super::core::{FunctionName, FunctionSignature, FunctionType};

const VALUE: &[FunctionType] = &[FunctionType::ValueType];
const NODES: &[FunctionType] = &[FunctionType::NodesType];
const VALUE_VALUE: &[FunctionType] = &[FunctionType::ValueType, FunctionType::ValueType];

impl FunctionName {
    /// Type signature of this built-in
    #[must_use]
    pub fn signature(self) -> FunctionSignature {
        let (parameter_types, return_type) = match self {
            FunctionName::Length => (VALUE, FunctionType::ValueType),
            FunctionName::Count | FunctionName::Value => (NODES, FunctionType::ValueType),
            FunctionName::Match | FunctionName::Search => (VALUE_VALUE, FunctionType::LogicalType),
        };
        FunctionSignature {
            name: self,
            parameter_types,
            return_type,
        }
    }
}
