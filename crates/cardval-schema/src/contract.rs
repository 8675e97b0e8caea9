//! # Card Contract
//!
//! The structural contract every card document must satisfy: a JSON object
//! with string-valued `title` and `image` keys. Additional properties are
//! permitted.
//!
//! The contract is a closed set of named [`RequiredField`] constraints,
//! fixed at compile time. It is checked natively against a parsed
//! [`serde_json::Value`]; the JSON Schema rendering from
//! [`Contract::to_json_schema`] is descriptive only.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// The value kind a required field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    String,
}

impl FieldKind {
    /// Returns true if `value` is of this kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
        }
    }

    /// The JSON Schema `type` keyword for this kind.
    pub fn json_type(self) -> &'static str {
        match self {
            FieldKind::String => "string",
        }
    }
}

/// A single named field that must be present with a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    /// Object key the field lives under.
    pub name: &'static str,
    /// Kind the value must have.
    pub kind: FieldKind,
}

impl RequiredField {
    /// Check this constraint against an object's properties.
    ///
    /// Returns `None` when the field is present and of the right kind.
    pub fn check(&self, object: &Map<String, Value>) -> Option<Violation> {
        match object.get(self.name) {
            None => Some(Violation {
                field: Some(self.name.to_string()),
                message: format!("\"{}\" is a required property", self.name),
            }),
            Some(value) if !self.kind.matches(value) => Some(Violation {
                field: Some(self.name.to_string()),
                message: format!(
                    "\"{}\" must be a {}, found {}",
                    self.name,
                    self.kind.json_type(),
                    json_type_name(value)
                ),
            }),
            Some(_) => None,
        }
    }
}

/// A fixed structural contract: an object with a set of required fields.
#[derive(Debug, Clone, Copy)]
pub struct Contract {
    /// Human-readable contract name, used in diagnostics.
    pub name: &'static str,
    /// Required fields, checked in declaration order.
    pub fields: &'static [RequiredField],
}

/// The card contract: `title` and `image`, both strings.
pub const CARD_CONTRACT: Contract = Contract {
    name: "card",
    fields: &[
        RequiredField {
            name: "title",
            kind: FieldKind::String,
        },
        RequiredField {
            name: "image",
            kind: FieldKind::String,
        },
    ],
};

impl Contract {
    /// Check `instance` against every constraint in the contract.
    ///
    /// A non-object root produces a single root-level violation. Otherwise
    /// all failing fields are reported, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolations`] (never empty) if the instance does
    /// not conform.
    pub fn check(&self, instance: &Value) -> Result<(), ContractViolations> {
        let Some(object) = instance.as_object() else {
            return Err(ContractViolations {
                contract: self.name,
                violations: vec![Violation {
                    field: None,
                    message: format!("expected an object, found {}", json_type_name(instance)),
                }],
            });
        };

        let violations: Vec<Violation> = self
            .fields
            .iter()
            .filter_map(|field| field.check(object))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractViolations {
                contract: self.name,
                violations,
            })
        }
    }

    /// Render the contract as the equivalent JSON Schema document.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), json!({ "type": f.kind.json_type() })))
            .collect();
        let required: Vec<&str> = self.fields.iter().map(|f| f.name).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// A single contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The offending field, or `None` for the document root.
    pub field: Option<String>,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "  /{field}: {}", self.message),
            None => write!(f, "  (root): {}", self.message),
        }
    }
}

/// Non-empty set of violations found while checking a contract.
#[derive(Error, Debug, Clone)]
#[error("document does not conform to the '{contract}' contract:\n{}", DisplayList(.violations))]
pub struct ContractViolations {
    contract: &'static str,
    violations: Vec<Violation>,
}

impl ContractViolations {
    /// Name of the contract that was violated.
    pub fn contract(&self) -> &str {
        self.contract
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

struct DisplayList<'a>(&'a [Violation]);

impl fmt::Display for DisplayList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A document that satisfied [`CARD_CONTRACT`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    pub image: String,
    /// Any properties beyond the required ones, kept as-is.
    #[serde(skip)]
    pub extra: BTreeMap<String, Value>,
}

impl Card {
    /// Check `value` against [`CARD_CONTRACT`] and convert it into a `Card`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolations`] if the value does not conform.
    pub fn from_value(value: Value) -> Result<Self, ContractViolations> {
        CARD_CONTRACT.check(&value)?;
        let mut card = Card::deserialize(&value).map_err(|e| ContractViolations {
            contract: CARD_CONTRACT.name,
            violations: vec![Violation {
                field: None,
                message: e.to_string(),
            }],
        })?;

        // Not `serde(flatten)`: it does not carry arbitrary-precision numbers.
        if let Value::Object(object) = value {
            card.extra = object
                .into_iter()
                .filter(|(key, _)| !CARD_CONTRACT.fields.iter().any(|f| f.name == key.as_str()))
                .collect();
        }
        Ok(card)
    }
}

/// JSON type name of a value, in JSON Schema vocabulary.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
