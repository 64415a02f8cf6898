use std::collections::BTreeMap;

use serde::Serialize;

/// Keyed container of resources. `BTreeMap` keeps keys sorted, which is the
/// order the serialized output must use.
pub type ResourceMap = BTreeMap<String, ResourceValue>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Integer(i64),
    String(String),
    /// Structure loaded from an external json or plist file.
    Document(serde_json::Value),
    Section(ResourceMap),
    List(Vec<ResourceValue>),
}

impl ResourceValue {
    pub fn as_section(&self) -> Option<&ResourceMap> {
        match self {
            Self::Section(map) => Some(map),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Document(_) => "document",
            Self::Section(_) => "section",
            Self::List(_) => "list",
        }
    }
}
