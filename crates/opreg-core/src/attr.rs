//! Operator attributes and the schemas they are validated against.

use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrKind {
    Bool,
    Int,
    Float,
    String,
    Ints,
    Floats,
    Strings,
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttrKind::Bool => "bool",
            AttrKind::Int => "int",
            AttrKind::Float => "float",
            AttrKind::String => "string",
            AttrKind::Ints => "ints",
            AttrKind::Floats => "floats",
            AttrKind::Strings => "strings",
        };
        f.write_str(name)
    }
}

/// Attribute value types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    String(String),
    Ints(Vec<i64>),
    Floats(Vec<f32>),
    Strings(Vec<String>),
}

impl AttrValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::Int(_) => AttrKind::Int,
            AttrValue::Float(_) => AttrKind::Float,
            AttrValue::String(_) => AttrKind::String,
            AttrValue::Ints(_) => AttrKind::Ints,
            AttrValue::Floats(_) => AttrKind::Floats,
            AttrValue::Strings(_) => AttrKind::Strings,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Float(v) => write!(f, "{v:?}"),
            AttrValue::String(v) => write!(f, "\"{v}\""),
            AttrValue::Ints(v) => write!(f, "{v:?}"),
            AttrValue::Floats(v) => write!(f, "{v:?}"),
            AttrValue::Strings(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

impl From<Vec<i64>> for AttrValue {
    fn from(v: Vec<i64>) -> Self {
        AttrValue::Ints(v)
    }
}

impl From<Vec<f32>> for AttrValue {
    fn from(v: Vec<f32>) -> Self {
        AttrValue::Floats(v)
    }
}

/// Default value of an attribute, expressible in a `static` schema table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrDefault {
    /// The caller must supply the attribute.
    Required,
    Bool(bool),
    Int(i64),
    Float(f32),
    Str(&'static str),
    Ints(&'static [i64]),
    Floats(&'static [f32]),
    Strings(&'static [&'static str]),
}

impl AttrDefault {
    /// Owned value for this default, or `None` if the attribute is required.
    pub fn to_value(&self) -> Option<AttrValue> {
        match *self {
            AttrDefault::Required => None,
            AttrDefault::Bool(v) => Some(AttrValue::Bool(v)),
            AttrDefault::Int(v) => Some(AttrValue::Int(v)),
            AttrDefault::Float(v) => Some(AttrValue::Float(v)),
            AttrDefault::Str(v) => Some(AttrValue::String(v.to_string())),
            AttrDefault::Ints(v) => Some(AttrValue::Ints(v.to_vec())),
            AttrDefault::Floats(v) => Some(AttrValue::Floats(v.to_vec())),
            AttrDefault::Strings(v) => Some(AttrValue::Strings(
                v.iter().map(|s| s.to_string()).collect(),
            )),
        }
    }
}

/// Declaration of one constructor attribute.
///
/// Specs are `const`-constructible so operator tables can live in statics:
///
/// ```
/// use opreg_core::{AttrKind, AttrSpec};
///
/// const PAD_MODE: AttrSpec = AttrSpec::string("pad_mode", "valid").one_of(&["valid", "same", "pad"]);
/// const OUT_CHANNEL: AttrSpec = AttrSpec::required("out_channel", AttrKind::Int);
/// assert!(OUT_CHANNEL.is_required());
/// assert_eq!(PAD_MODE.choices.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttrSpec {
    pub name: &'static str,
    pub kind: AttrKind,
    pub default: AttrDefault,
    /// Allowed values for string attributes. Empty means unrestricted.
    pub choices: &'static [&'static str],
}

impl AttrSpec {
    pub const fn required(name: &'static str, kind: AttrKind) -> Self {
        Self {
            name,
            kind,
            default: AttrDefault::Required,
            choices: &[],
        }
    }

    pub const fn bool(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: AttrKind::Bool,
            default: AttrDefault::Bool(default),
            choices: &[],
        }
    }

    pub const fn int(name: &'static str, default: i64) -> Self {
        Self {
            name,
            kind: AttrKind::Int,
            default: AttrDefault::Int(default),
            choices: &[],
        }
    }

    pub const fn float(name: &'static str, default: f32) -> Self {
        Self {
            name,
            kind: AttrKind::Float,
            default: AttrDefault::Float(default),
            choices: &[],
        }
    }

    pub const fn string(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: AttrKind::String,
            default: AttrDefault::Str(default),
            choices: &[],
        }
    }

    pub const fn ints(name: &'static str, default: &'static [i64]) -> Self {
        Self {
            name,
            kind: AttrKind::Ints,
            default: AttrDefault::Ints(default),
            choices: &[],
        }
    }

    pub const fn floats(name: &'static str, default: &'static [f32]) -> Self {
        Self {
            name,
            kind: AttrKind::Floats,
            default: AttrDefault::Floats(default),
            choices: &[],
        }
    }

    /// Restrict a string attribute to the given values.
    pub const fn one_of(self, choices: &'static [&'static str]) -> Self {
        Self { choices, ..self }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.default, AttrDefault::Required)
    }

    fn check(&self, op: &str, value: &AttrValue) -> Result<()> {
        if value.kind() != self.kind {
            return Err(Error::Attribute(format!(
                "{op}: attribute '{}' expects {}, got {}",
                self.name,
                self.kind,
                value.kind()
            )));
        }

        if let AttrValue::String(s) = value {
            if !self.choices.is_empty() && !self.choices.contains(&s.as_str()) {
                return Err(Error::Attribute(format!(
                    "{op}: attribute '{}' must be one of {:?}, got \"{s}\"",
                    self.name, self.choices
                )));
            }
        }

        Ok(())
    }
}

/// A set of named attribute values, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, returning `self` for chaining.
    pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn require(&self, name: &str) -> Result<&AttrValue> {
        self.get(name)
            .ok_or_else(|| Error::Attribute(format!("Missing attribute: {name}")))
    }

    /// Get a bool attribute.
    pub fn bool(&self, name: &str) -> Result<bool> {
        match self.require(name)? {
            AttrValue::Bool(v) => Ok(*v),
            _ => Err(Error::Attribute(format!("Attribute {name} is not a bool"))),
        }
    }

    /// Get an i64 attribute.
    pub fn i64(&self, name: &str) -> Result<i64> {
        match self.require(name)? {
            AttrValue::Int(v) => Ok(*v),
            _ => Err(Error::Attribute(format!("Attribute {name} is not an i64"))),
        }
    }

    /// Get an f32 attribute.
    pub fn f32(&self, name: &str) -> Result<f32> {
        match self.require(name)? {
            AttrValue::Float(v) => Ok(*v),
            _ => Err(Error::Attribute(format!("Attribute {name} is not an f32"))),
        }
    }

    /// Get a string attribute.
    pub fn string(&self, name: &str) -> Result<&str> {
        match self.require(name)? {
            AttrValue::String(v) => Ok(v.as_str()),
            _ => Err(Error::Attribute(format!("Attribute {name} is not a string"))),
        }
    }

    /// Get an i64 array attribute.
    pub fn ints(&self, name: &str) -> Result<&[i64]> {
        match self.require(name)? {
            AttrValue::Ints(v) => Ok(v.as_slice()),
            _ => Err(Error::Attribute(format!(
                "Attribute {name} is not an i64 array"
            ))),
        }
    }

    /// Get an f32 array attribute.
    pub fn floats(&self, name: &str) -> Result<&[f32]> {
        match self.require(name)? {
            AttrValue::Floats(v) => Ok(v.as_slice()),
            _ => Err(Error::Attribute(format!(
                "Attribute {name} is not an f32 array"
            ))),
        }
    }

    /// Validate `given` against `specs` and fill in defaults.
    ///
    /// Fails on attributes the operator does not declare, values of the wrong
    /// kind, string values outside the allowed choices, and missing required
    /// attributes.
    pub fn resolve(op: &str, specs: &[AttrSpec], given: &Attributes) -> Result<Attributes> {
        if let Some((name, _)) = given
            .iter()
            .find(|(name, _)| !specs.iter().any(|spec| spec.name == *name))
        {
            return Err(Error::Attribute(format!(
                "{op}: unknown attribute '{name}'"
            )));
        }

        let mut resolved = Attributes::new();
        for spec in specs {
            let value = match given.get(spec.name) {
                Some(value) => value.clone(),
                None => spec.default.to_value().ok_or_else(|| {
                    Error::Attribute(format!(
                        "{op}: missing required attribute '{}'",
                        spec.name
                    ))
                })?,
            };
            spec.check(op, &value)?;
            resolved.values.insert(spec.name.to_string(), value);
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[AttrSpec] = &[
        AttrSpec::string("method", "bilinear").one_of(&["bilinear", "nearest"]),
        AttrSpec::float("extrapolation_value", 0.0),
        AttrSpec::required("kernel_size", AttrKind::Ints),
    ];

    #[test]
    fn test_resolve_fills_defaults() {
        let given = Attributes::new().with("kernel_size", vec![3i64, 3]);
        let attrs = Attributes::resolve("Op", SPECS, &given).unwrap();

        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs.string("method").unwrap(), "bilinear");
        assert_eq!(attrs.f32("extrapolation_value").unwrap(), 0.0);
        assert_eq!(attrs.ints("kernel_size").unwrap(), &[3, 3]);
    }

    #[test]
    fn test_resolve_keeps_given_values() {
        let given = Attributes::new()
            .with("kernel_size", vec![1i64])
            .with("method", "nearest")
            .with("extrapolation_value", 1.5f32);
        let attrs = Attributes::resolve("Op", SPECS, &given).unwrap();

        assert_eq!(attrs.string("method").unwrap(), "nearest");
        assert_eq!(attrs.f32("extrapolation_value").unwrap(), 1.5);
    }

    #[test]
    fn test_resolve_rejects_unknown_attribute() {
        let given = Attributes::new()
            .with("kernel_size", vec![1i64])
            .with("stride", 2i64);
        let err = Attributes::resolve("Op", SPECS, &given).unwrap_err();
        assert!(err.to_string().contains("unknown attribute 'stride'"));
    }

    #[test]
    fn test_resolve_rejects_wrong_kind() {
        let given = Attributes::new()
            .with("kernel_size", vec![1i64])
            .with("extrapolation_value", 0i64);
        let err = Attributes::resolve("Op", SPECS, &given).unwrap_err();
        assert!(matches!(err, Error::Attribute(_)));
        assert!(err.to_string().contains("expects float, got int"));
    }

    #[test]
    fn test_resolve_rejects_disallowed_choice() {
        let given = Attributes::new()
            .with("kernel_size", vec![1i64])
            .with("method", "bicubic");
        let err = Attributes::resolve("Op", SPECS, &given).unwrap_err();
        assert!(err.to_string().contains("must be one of"));
    }

    #[test]
    fn test_resolve_requires_required() {
        let err = Attributes::resolve("Op", SPECS, &Attributes::new()).unwrap_err();
        assert!(err
            .to_string()
            .contains("missing required attribute 'kernel_size'"));
    }

    #[test]
    fn test_typed_getters() {
        let attrs = Attributes::new().with("keep_dims", true).with("axis", -1i64);

        assert!(attrs.bool("keep_dims").unwrap());
        assert_eq!(attrs.i64("axis").unwrap(), -1);
        assert!(attrs.string("axis").is_err());
        assert!(attrs.f32("missing").is_err());
    }
}
