//! Data model for registry commands, as handed over by the registry loader.

use serde::{Deserialize, Deserializer};

/// Top-level registry export.
#[derive(Debug, Default, Deserialize)]
pub struct Registry {
    pub commands: Vec<Command>,
}

/// A single API command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Command {
    pub name: String,
    /// Name of the command this one aliases, if any
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub params: Vec<Param>,
    /// Free-text `implicitexternsyncparams` entries
    #[serde(default)]
    pub implicit_externsync: Vec<String>,
}

/// A command parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Param {
    pub name: String,
    /// Base type name, e.g. "VkBuffer"
    #[serde(rename = "type", default)]
    #[allow(dead_code)]
    pub ty: String,
    /// Text trailing the type, e.g. "*" or "* const*"
    #[serde(default)]
    pub suffix: String,
    /// Length / array descriptor
    #[serde(default)]
    pub len: Option<String>,
    /// Raw externsync annotation (possibly comma-separated)
    #[serde(default, deserialize_with = "externsync_value")]
    pub externsync: Option<String>,
}

impl Param {
    pub fn is_array(&self) -> bool {
        self.len.is_some()
    }

    pub fn is_pointer(&self) -> bool {
        self.suffix.contains('*')
    }
}

/// Accept either a string annotation or a boolean (`true` ≡ "true", `false` ≡ absent).
fn externsync_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Flag(true)) => Some("true".to_string()),
        Some(Raw::Flag(false)) | None => None,
        Some(Raw::Text(s)) => Some(s),
    })
}

/// Parse a registry export: either `{"commands": [...]}` or a bare array.
pub fn parse_registry(input: &str) -> serde_json::Result<Registry> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape {
        Object(Registry),
        List(Vec<Command>),
    }

    Ok(match serde_json::from_str::<Shape>(input)? {
        Shape::Object(reg) => reg,
        Shape::List(commands) => Registry { commands },
    })
}
