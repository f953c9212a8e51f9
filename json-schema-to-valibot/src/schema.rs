//! JSON Schema input model.
//!
//! The node keeps `type` tags as raw strings; they are checked against the
//! closed [`TypeTag`] set when the dispatcher first inspects them, so an
//! unrecognized tag surfaces as the compiler's "unsupported type" error
//! rather than a deserialization failure.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// One JSON-Schema-shaped subtree (draft-4 flavored), with `$ref`
/// references already resolved by the caller.
///
/// Property order is preserved: emitted object fields follow the order in
/// which `properties` declares them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaNode {
    /// The `type` keyword: a single tag or an ordered sequence of tags.
    #[serde(rename = "type")]
    pub ty: Option<TypeSet>,

    /// Property name to nested schema, in declared order.
    pub properties: Option<IndexMap<String, SchemaNode>>,

    /// Names of required properties.
    pub required: Option<Vec<String>>,

    /// Element schema for arrays.
    pub items: Option<Box<SchemaNode>>,

    /// Closed set of literal values.
    #[serde(rename = "enum")]
    pub enumeration: Option<Vec<Value>>,

    /// Union branches imposed alongside any sibling keywords.
    pub any_of: Option<Vec<SchemaNode>>,

    /// Default value. An explicit JSON `null` default is distinct from an
    /// absent one, hence the custom deserializer.
    #[serde(deserialize_with = "some_value")]
    pub default: Option<Value>,

    /// Free-text description.
    pub description: Option<String>,

    /// Named string format (`email`, `uuid`, ...).
    pub format: Option<String>,

    /// Regular-expression constraint on strings.
    pub pattern: Option<String>,

    /// Minimum string length.
    pub min_length: Option<u64>,

    /// Maximum string length.
    pub max_length: Option<u64>,

    /// Inclusive numeric lower bound, unless `exclusiveMinimum` is set.
    pub minimum: Option<serde_json::Number>,

    /// Inclusive numeric upper bound, unless `exclusiveMaximum` is set.
    pub maximum: Option<serde_json::Number>,

    /// Draft-4 boolean marking `minimum` as exclusive.
    pub exclusive_minimum: bool,

    /// Draft-4 boolean marking `maximum` as exclusive.
    pub exclusive_maximum: bool,

    /// Divisibility constraint.
    pub multiple_of: Option<serde_json::Number>,
}

impl SchemaNode {
    /// Deserializes a node from an in-memory JSON tree.
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        SchemaNode::deserialize(value)
    }

    /// Derived node with `type` replaced by a single tag, all other fields
    /// copied unchanged. Used for type-array fan-out; the input node is
    /// never mutated.
    pub(crate) fn with_single_type(&self, tag: &str) -> Self {
        let mut node = self.clone();
        node.ty = Some(TypeSet::One(tag.to_string()));
        node
    }
}

/// Keeps an explicit `null` distinguishable from an absent field.
fn some_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The `type` keyword: one tag or an ordered sequence of tags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    /// A single type tag.
    One(String),
    /// An ordered sequence of type tags.
    Many(Vec<String>),
}

/// The closed set of recognized type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `object`
    Object,
    /// `array`
    Array,
}

impl TypeTag {
    /// Parses a raw tag, failing with [`Error::UnsupportedType`] on
    /// anything outside the recognized set.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "string" => Ok(TypeTag::String),
            "number" => Ok(TypeTag::Number),
            "integer" => Ok(TypeTag::Integer),
            "boolean" => Ok(TypeTag::Boolean),
            "null" => Ok(TypeTag::Null),
            "object" => Ok(TypeTag::Object),
            "array" => Ok(TypeTag::Array),
            other => Err(Error::UnsupportedType {
                type_name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_single_type() {
        let node = SchemaNode::from_value(&json!({"type": "string"})).unwrap();
        assert_eq!(node.ty, Some(TypeSet::One("string".to_string())));
    }

    #[test]
    fn test_deserialize_type_sequence() {
        let node = SchemaNode::from_value(&json!({"type": ["string", "null"]})).unwrap();
        assert_eq!(
            node.ty,
            Some(TypeSet::Many(vec![
                "string".to_string(),
                "null".to_string()
            ]))
        );
    }

    #[test]
    fn test_deserialize_preserves_property_order() {
        let node = SchemaNode::from_value(&json!({
            "type": "object",
            "properties": {"zebra": {"type": "string"}, "apple": {"type": "number"}}
        }))
        .unwrap();
        let keys: Vec<_> = node.properties.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_null_default_is_present() {
        let node = SchemaNode::from_value(&json!({"type": "null", "default": null})).unwrap();
        assert_eq!(node.default, Some(Value::Null));
    }

    #[test]
    fn test_absent_default_is_none() {
        let node = SchemaNode::from_value(&json!({"type": "string"})).unwrap();
        assert_eq!(node.default, None);
    }

    #[test]
    fn test_unknown_keywords_are_ignored() {
        let node = SchemaNode::from_value(&json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "title": "ignored",
            "type": "boolean"
        }))
        .unwrap();
        assert_eq!(node.ty, Some(TypeSet::One("boolean".to_string())));
    }

    #[test]
    fn test_type_tag_rejects_unknown() {
        let err = TypeTag::parse("invalid").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type: invalid");
    }

    #[test]
    fn test_with_single_type_keeps_other_fields() {
        let node = SchemaNode::from_value(&json!({
            "type": ["string", "number"],
            "description": "kept"
        }))
        .unwrap();
        let derived = node.with_single_type("string");
        assert_eq!(derived.ty, Some(TypeSet::One("string".to_string())));
        assert_eq!(derived.description.as_deref(), Some("kept"));
        assert_eq!(node.ty, Some(TypeSet::Many(vec!["string".into(), "number".into()])));
    }
}
