//! Read-only view of a moddle schema document.
//!
//! Field names follow the wire format (`superClass`, `extends`, `isMany`,
//! `literalValues`); unknown fields are ignored so real-world schemas with
//! `isAttr`, `isReference`, `meta`, etc. parse cleanly. The compiler never
//! mutates any of this.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Error;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Root input: one package's types and enumerations.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Package identifier; also the name of the exported aggregate type.
    pub name: String,
    /// Namespace short-name used to qualify type keys (`bpmn` in `bpmn:Task`).
    pub prefix: String,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    #[serde(default)]
    pub enumerations: Vec<Enumeration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Zero-or-one parent reference; the model carries a list but only the
    /// first entry is meaningful.
    #[serde(default, rename = "superClass")]
    pub super_types: Vec<String>,
    /// Alternate names under which this declaration is emitted instead of
    /// `name`. Only the first entry is meaningful.
    #[serde(default, rename = "extends")]
    pub redirect_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub name: String,
    /// Scalar keyword, local type name, or namespaced `ns:TypeName`.
    #[serde(rename = "type")]
    pub ty: String,
    /// false → exactly the referenced shape; true → ordered sequence of it.
    #[serde(default, rename = "isMany")]
    pub is_many: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Enumeration {
    pub name: String,
    #[serde(rename = "literalValues")]
    pub literal_values: Vec<Literal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Literal {
    /// Used verbatim as the enum member identifier.
    pub name: String,
}

// ————————————————————————————————————————————————————————————————————————————
// PARSING
// ————————————————————————————————————————————————————————————————————————————

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, Error> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| Error::Parse {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

// ------------------------------- Tests ------------------------------------ //
