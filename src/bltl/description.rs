//! External node-description format.
//!
//! Formula trees produced by other tools arrive as nested records with
//! PascalCase fields and numeric codes:
//!
//! ```json
//! {
//!   "NodeType": 6,
//!   "Alpha": 2.0,
//!   "FirstChildNode": { "NodeType": 0, "PredicateIndex": 0 },
//!   "SecondChildNode": { "NodeType": 0, "PredicateIndex": 1 }
//! }
//! ```
//!
//! Node-type codes: 0 Predicate, 1 Not, 2 And, 3 Or, 4 Future, 5 Globally,
//! 6 Until. Numbers are accepted as JSON floats and validated on conversion.

use crate::bltl::formula_definition::FormulaDefinition;
use crate::error::FormulaError;
use serde::{Deserialize, Serialize};

/// One node of an externally supplied formula tree. Fields a node kind does
/// not use are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeDescription {
    pub node_type: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicate_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_node: Option<Box<NodeDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_child_node: Option<Box<NodeDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_child_node: Option<Box<NodeDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum NodeKind {
    Predicate,
    Not,
    And,
    Or,
    Future,
    Globally,
    Until,
}

impl NodeKind {
    fn from_code(code: f64) -> Result<Self, FormulaError> {
        if code.fract() != 0.0 {
            return Err(FormulaError::UnknownNodeType(code));
        }
        let kind = match code as i64 {
            0 => NodeKind::Predicate,
            1 => NodeKind::Not,
            2 => NodeKind::And,
            3 => NodeKind::Or,
            4 => NodeKind::Future,
            5 => NodeKind::Globally,
            6 => NodeKind::Until,
            _ => return Err(FormulaError::UnknownNodeType(code)),
        };
        Ok(kind)
    }

    fn name(self) -> &'static str {
        match self {
            NodeKind::Predicate => "Predicate",
            NodeKind::Not => "Not",
            NodeKind::And => "And",
            NodeKind::Or => "Or",
            NodeKind::Future => "Future",
            NodeKind::Globally => "Globally",
            NodeKind::Until => "Until",
        }
    }
}

impl NodeDescription {
    fn only_child(&self, kind: NodeKind) -> Result<Box<FormulaDefinition>, FormulaError> {
        let child = self.child_node.as_deref().ok_or(FormulaError::MissingField {
            node: kind.name(),
            field: "ChildNode",
        })?;
        Ok(Box::new(FormulaDefinition::try_from(child)?))
    }

    fn children(
        &self,
        kind: NodeKind,
    ) -> Result<(Box<FormulaDefinition>, Box<FormulaDefinition>), FormulaError> {
        let first = self.first_child_node.as_deref().ok_or(FormulaError::MissingField {
            node: kind.name(),
            field: "FirstChildNode",
        })?;
        let second = self.second_child_node.as_deref().ok_or(FormulaError::MissingField {
            node: kind.name(),
            field: "SecondChildNode",
        })?;
        Ok((
            Box::new(FormulaDefinition::try_from(first)?),
            Box::new(FormulaDefinition::try_from(second)?),
        ))
    }

    fn horizon(&self, kind: NodeKind) -> Result<f64, FormulaError> {
        let alpha = self.alpha.ok_or(FormulaError::MissingField {
            node: kind.name(),
            field: "Alpha",
        })?;
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(FormulaError::InvalidHorizon(alpha));
        }
        Ok(alpha)
    }

    fn predicate(&self) -> Result<usize, FormulaError> {
        let index = self.predicate_index.ok_or(FormulaError::MissingField {
            node: NodeKind::Predicate.name(),
            field: "PredicateIndex",
        })?;
        if !(index >= 0.0 && index.fract() == 0.0 && index <= u32::MAX as f64) {
            return Err(FormulaError::InvalidPredicateIndex(index));
        }
        Ok(index as usize)
    }
}

impl TryFrom<&NodeDescription> for FormulaDefinition {
    type Error = FormulaError;

    /// Validates the description recursively. Nothing is returned unless the
    /// whole tree is well formed.
    fn try_from(node: &NodeDescription) -> Result<Self, Self::Error> {
        let code = node.node_type.ok_or(FormulaError::MissingField {
            node: "formula",
            field: "NodeType",
        })?;
        let kind = NodeKind::from_code(code)?;

        let formula = match kind {
            NodeKind::Predicate => FormulaDefinition::Predicate(node.predicate()?),
            NodeKind::Not => FormulaDefinition::Not(node.only_child(kind)?),
            NodeKind::And => {
                let (f1, f2) = node.children(kind)?;
                FormulaDefinition::And(f1, f2)
            }
            NodeKind::Or => {
                let (f1, f2) = node.children(kind)?;
                FormulaDefinition::Or(f1, f2)
            }
            NodeKind::Future => {
                FormulaDefinition::Future(node.horizon(kind)?, node.only_child(kind)?)
            }
            NodeKind::Globally => {
                FormulaDefinition::Globally(node.horizon(kind)?, node.only_child(kind)?)
            }
            NodeKind::Until => {
                let (f1, f2) = node.children(kind)?;
                FormulaDefinition::Until(node.horizon(kind)?, f1, f2)
            }
        };
        Ok(formula)
    }
}

/// Parses a JSON node description and converts it to a [`FormulaDefinition`].
pub fn parse_node_description(json: &str) -> Result<FormulaDefinition, FormulaError> {
    let description: NodeDescription = serde_json::from_str(json)?;
    FormulaDefinition::try_from(&description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_until_of_predicates() {
        let json = r#"{
            "NodeType": 6,
            "Alpha": 2.0,
            "FirstChildNode": { "NodeType": 0, "PredicateIndex": 0 },
            "SecondChildNode": { "NodeType": 0, "PredicateIndex": 1 }
        }"#;
        let formula = parse_node_description(json).unwrap();
        assert_eq!(formula.to_string(), "(p0) U[0, 2] (p1)");
    }

    #[test]
    fn parses_nested_derived_operators() {
        let json = r#"{
            "NodeType": 5,
            "Alpha": 1,
            "ChildNode": {
                "NodeType": 2,
                "FirstChildNode": { "NodeType": 1, "ChildNode": { "NodeType": 0, "PredicateIndex": 2 } },
                "SecondChildNode": {
                    "NodeType": 3,
                    "FirstChildNode": { "NodeType": 0, "PredicateIndex": 0 },
                    "SecondChildNode": { "NodeType": 4, "Alpha": 0.5, "ChildNode": { "NodeType": 0, "PredicateIndex": 1 } }
                }
            }
        }"#;
        let formula = parse_node_description(json).unwrap();
        assert_eq!(
            formula.to_string(),
            "G[0, 1]((¬(p2)) ∧ ((p0) ∨ (F[0, 0.5](p1))))"
        );
        assert_eq!(formula.min_time(), 1.5);
        assert_eq!(formula.predicate_count(), 3);
    }

    #[test]
    fn missing_fields_name_the_node() {
        let err = parse_node_description(r#"{ "NodeType": 1 }"#).unwrap_err();
        assert!(matches!(
            err,
            FormulaError::MissingField {
                node: "Not",
                field: "ChildNode"
            }
        ));

        let err = parse_node_description(
            r#"{ "NodeType": 6, "FirstChildNode": { "NodeType": 0, "PredicateIndex": 0 },
                 "SecondChildNode": { "NodeType": 0, "PredicateIndex": 0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FormulaError::MissingField {
                node: "Until",
                field: "Alpha"
            }
        ));

        let err = parse_node_description(r#"{ "PredicateIndex": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            FormulaError::MissingField {
                field: "NodeType",
                ..
            }
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        let err = parse_node_description(r#"{ "NodeType": 9 }"#).unwrap_err();
        assert!(matches!(err, FormulaError::UnknownNodeType(code) if code == 9.0));

        let err = parse_node_description(r#"{ "NodeType": 0, "PredicateIndex": -1 }"#).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidPredicateIndex(_)));

        let err = parse_node_description(r#"{ "NodeType": 0, "PredicateIndex": 1.5 }"#).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidPredicateIndex(_)));

        let err = parse_node_description(
            r#"{ "NodeType": 4, "Alpha": 0, "ChildNode": { "NodeType": 0, "PredicateIndex": 0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FormulaError::InvalidHorizon(_)));

        let err = parse_node_description("{ not json").unwrap_err();
        assert!(matches!(err, FormulaError::Json(_)));
    }

    #[test]
    fn error_deep_in_tree_fails_whole_build() {
        let json = r#"{
            "NodeType": 3,
            "FirstChildNode": { "NodeType": 0, "PredicateIndex": 0 },
            "SecondChildNode": { "NodeType": 1, "ChildNode": { "NodeType": 0 } }
        }"#;
        let err = parse_node_description(json).unwrap_err();
        assert!(matches!(
            err,
            FormulaError::MissingField {
                node: "Predicate",
                field: "PredicateIndex"
            }
        ));
    }
}
