use serde_json::Value;

/// A JSON-LD field value in one of the shapes sites actually publish.
///
/// Schema.org properties show up as bare strings, as value objects
/// (`{"@value": "..."}`, or `{"text": "..."}` for instruction steps), or as
/// arrays mixing either. Anything else is kept as its JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(String),
    Wrapped(String),
    List(Vec<FieldValue>),
}

/// Which key a wrapped object may carry its value under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKeys {
    /// `@value` only
    Value,
    /// `text`, then `@value` (instruction entries)
    Text,
}

impl FieldValue {
    /// `None` for `null` and `false`, which sites publish in place of a
    /// missing value. Such entries are also dropped from lists.
    pub fn from_json(value: &Value, keys: WrapKeys) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) => Some(FieldValue::Scalar(s.clone())),
            Value::Array(items) => Some(FieldValue::List(
                items
                    .iter()
                    .filter_map(|v| Self::from_json(v, keys))
                    .collect(),
            )),
            other => Some(FieldValue::Wrapped(unwrap_object(other, keys))),
        }
    }

    /// Resolves to a single string. Lists are joined with `separator`.
    pub fn into_text(self, separator: &str) -> String {
        match self {
            FieldValue::Scalar(s) | FieldValue::Wrapped(s) => s,
            FieldValue::List(items) => items
                .into_iter()
                .map(|item| item.into_text(separator))
                .collect::<Vec<_>>()
                .join(separator),
        }
    }

    /// Resolves to a sequence, treating a lone value as a one-element list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::Scalar(s) | FieldValue::Wrapped(s) => vec![s],
            FieldValue::List(items) => items
                .into_iter()
                .flat_map(|item| item.into_list())
                .collect(),
        }
    }
}

fn unwrap_object(value: &Value, keys: WrapKeys) -> String {
    let candidates: &[&str] = match keys {
        WrapKeys::Value => &["@value"],
        WrapKeys::Text => &["text", "@value"],
    };
    candidates
        .iter()
        .filter_map(|key| value.get(key))
        .find_map(non_empty_scalar)
        .unwrap_or_else(|| scalar_to_string(value))
}

fn non_empty_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(scalar_to_string(other)),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
