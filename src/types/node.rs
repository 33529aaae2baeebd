//! Node identities and the loosely typed values accepted by edge insertion.

use std::fmt;

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// A node identity: an integer, a text string, or a fixed-size tuple of these.
///
/// Nodes compare by value. The derived ordering (integers, then text, then
/// tuples) is only used for sorted rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Integer identity.
    Int(i64),
    /// Text identity.
    Text(String),
    /// Tuple of identities.
    Tuple(Vec<Node>),
}

impl Node {
    /// Parse a plain text token: a (signed) decimal integer becomes
    /// [`Node::Int`], anything else [`Node::Text`]. The token is trimmed.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(value) => Self::Int(value),
            Err(_) => Self::Text(token.to_string()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
            Self::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A loosely typed value handed to edge insertion.
///
/// Only [`Value::Int`], [`Value::Text`] and tuples made of those are valid
/// node identities; everything else is rejected with
/// [`GraphError::InvalidNodeType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
    Tuple(Vec<Value>),
    Float(f64),
    /// Mutable composite. Never hashable.
    List(Vec<Value>),
}

impl Value {
    /// Name of the value's kind, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "str",
            Self::Tuple(_) => "tuple",
            Self::Float(_) => "float",
            Self::List(_) => "list",
        }
    }
}

impl TryFrom<Value> for Node {
    type Error = GraphError;

    fn try_from(value: Value) -> GraphResult<Self> {
        match value {
            Value::Int(v) => Ok(Node::Int(v)),
            Value::Text(s) => Ok(Node::Text(s)),
            Value::Tuple(items) => items
                .into_iter()
                .map(Node::try_from)
                .collect::<GraphResult<Vec<_>>>()
                .map(Node::Tuple),
            other => Err(GraphError::InvalidNodeType(other.kind())),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Int(v) => Value::Int(v),
            Node::Text(s) => Value::Text(s),
            Node::Tuple(items) => Value::Tuple(items.into_iter().map(Value::from).collect()),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        Value::from(node.clone())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Tuple(vec![a.into(), b.into(), c.into()])
    }
}
