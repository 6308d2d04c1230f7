//! Schema record definitions.
//!
//! This module contains the data structures decoded from one class schema:
//! the record itself, template parameters, function specs and the
//! visibility-grouped sections.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

/// One decoded class description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaRecord {
    /// Display name of the class.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Template parameters, in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: Vec<TemplateParam>,
    /// Base class type expressions, in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub supers: Vec<String>,
    /// Function specs grouped by visibility.
    #[serde(default, deserialize_with = "null_as_default")]
    pub functions: VisibilityGroups<FunctionSpec>,
    /// Member type expressions grouped by visibility.
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: VisibilityGroups<String>,
    /// Headers to include ahead of the class.
    #[serde(default, deserialize_with = "null_as_default")]
    pub includes: Vec<String>,
    /// Classes to forward declare ahead of the class.
    #[serde(default, deserialize_with = "null_as_default")]
    pub forwards: Vec<String>,
}

impl SchemaRecord {
    /// Creates an empty record with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a base class.
    #[must_use]
    pub fn with_super(mut self, super_type: impl Into<String>) -> Self {
        self.supers.push(super_type.into());
        self
    }

    /// Adds a template parameter.
    #[must_use]
    pub fn with_template_param(mut self, param: TemplateParam) -> Self {
        self.template.push(param);
        self
    }

    /// Adds a function to the given visibility section.
    #[must_use]
    pub fn with_function(
        mut self,
        visibility: Visibility,
        name: impl Into<String>,
        spec: FunctionSpec,
    ) -> Self {
        self.functions.get_mut(visibility).insert(name, spec);
        self
    }

    /// Adds a member to the given visibility section.
    #[must_use]
    pub fn with_member(
        mut self,
        visibility: Visibility,
        name: impl Into<String>,
        type_expr: impl Into<String>,
    ) -> Self {
        self.members.get_mut(visibility).insert(name, type_expr.into());
        self
    }
}

/// A template parameter: `{type, name, default?}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateParam {
    /// Parameter kind as a type expression (`typename`, `int`, ...).
    #[serde(rename = "type")]
    pub type_expr: String,
    /// Parameter name.
    pub name: String,
    /// Optional default value.
    #[serde(default)]
    pub default: Option<Scalar>,
}

impl TemplateParam {
    /// Creates a parameter without a default.
    #[must_use]
    pub fn new(type_expr: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_expr: type_expr.into(),
            name: name.into(),
            default: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: Scalar) -> Self {
        self.default = Some(default);
        self
    }
}

/// A YAML scalar kept only for its textual form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// Any other text.
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            // Debug keeps the fractional part of whole floats (`1.0`).
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// A function declaration spec.
///
/// A null body in the document (`reset:` with nothing after it) decodes to
/// the default spec: no arguments, `void` return.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Option<RawFunctionSpec>")]
pub struct FunctionSpec {
    /// Return type expression; `None` means no value.
    pub return_type: Option<String>,
    /// Qualifier placed before the return type (`static`, `virtual`).
    pub dec: Option<String>,
    /// Qualifier placed after the argument list (`const`, `override`).
    pub modifier: Option<String>,
    /// Arguments as name to type expression, in document order.
    pub args: OrderedMap<String>,
}

impl FunctionSpec {
    /// Creates an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the return type expression.
    #[must_use]
    pub fn returns(mut self, type_expr: impl Into<String>) -> Self {
        self.return_type = Some(type_expr.into());
        self
    }

    /// Sets the prefix qualifier.
    #[must_use]
    pub fn dec(mut self, dec: impl Into<String>) -> Self {
        self.dec = Some(dec.into());
        self
    }

    /// Sets the suffix qualifier.
    #[must_use]
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    /// Appends an argument.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        self.args.insert(name, type_expr.into());
        self
    }
}

#[derive(Deserialize)]
struct RawFunctionSpec {
    #[serde(default, rename = "return")]
    return_type: Option<String>,
    #[serde(default)]
    dec: Option<String>,
    #[serde(default, rename = "mod")]
    modifier: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    args: OrderedMap<String>,
}

impl From<Option<RawFunctionSpec>> for FunctionSpec {
    fn from(raw: Option<RawFunctionSpec>) -> Self {
        raw.map_or_else(Self::default, |raw| Self {
            return_type: raw.return_type,
            dec: raw.dec,
            modifier: raw.modifier,
            args: raw.args,
        })
    }
}

/// Visibility tag of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

impl Visibility {
    /// All visibilities in emission order.
    pub const ALL: [Self; 3] = [Self::Public, Self::Protected, Self::Private];

    /// Returns the tag as written in schemas and section labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }

    /// Returns the capitalized tag used in section headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Protected => "Protected",
            Self::Private => "Private",
        }
    }

    /// Parses a tag. Unknown tags yield `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Items grouped under the three visibility tags.
///
/// Tags outside the closed set are dropped while decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
pub struct VisibilityGroups<V> {
    /// `public` section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub public: OrderedMap<V>,
    /// `protected` section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub protected: OrderedMap<V>,
    /// `private` section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub private: OrderedMap<V>,
}

impl<V> Default for VisibilityGroups<V> {
    fn default() -> Self {
        Self {
            public: OrderedMap::new(),
            protected: OrderedMap::new(),
            private: OrderedMap::new(),
        }
    }
}

impl<V> VisibilityGroups<V> {
    /// Returns the section for a visibility.
    #[must_use]
    pub const fn get(&self, visibility: Visibility) -> &OrderedMap<V> {
        match visibility {
            Visibility::Public => &self.public,
            Visibility::Protected => &self.protected,
            Visibility::Private => &self.private,
        }
    }

    /// Returns the section for a visibility, mutably.
    pub fn get_mut(&mut self, visibility: Visibility) -> &mut OrderedMap<V> {
        match visibility {
            Visibility::Public => &mut self.public,
            Visibility::Protected => &mut self.protected,
            Visibility::Private => &mut self.private,
        }
    }

    /// Returns true if every section is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Visibility::ALL.iter().all(|v| self.get(*v).is_empty())
    }
}

/// A string-keyed map that keeps document order.
///
/// Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Treats an explicit YAML null the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_round_trip_tags() {
        for v in Visibility::ALL {
            assert_eq!(Visibility::parse(v.as_str()), Some(v));
        }
        assert_eq!(Visibility::parse("internal"), None);
        assert_eq!(Visibility::Protected.title(), "Protected");
    }

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("zeta", 3);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(map.get("zeta"), Some(&3));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Int(10).to_string(), "10");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::from("std::less< T >").to_string(), "std::less< T >");
    }

    #[test]
    fn test_scalar_float_keeps_fraction() {
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Float(0.25).to_string(), "0.25");

        let scalar: Scalar = serde_yaml::from_str("1.0").expect("Failed to parse scalar");
        assert_eq!(scalar, Scalar::Float(1.0));
        assert_eq!(scalar.to_string(), "1.0");
    }

    #[test]
    fn test_visibility_groups_deserialize() {
        let yaml = "public:\n  zeta: int\n  alpha: float\nprotected: ~\ninternal:\n  x: int\n";
        let groups: VisibilityGroups<String> =
            serde_yaml::from_str(yaml).expect("Failed to parse groups");

        let keys: Vec<&str> = groups.public.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert!(groups.protected.is_empty());
        assert!(groups.private.is_empty());
    }

    #[test]
    fn test_record_builder() {
        let record = SchemaRecord::new("Widget")
            .with_super("Base")
            .with_member(Visibility::Private, "count", "int")
            .with_function(
                Visibility::Public,
                "getCount",
                FunctionSpec::new().returns("int").modifier("const"),
            );

        assert_eq!(record.supers, vec!["Base".to_string()]);
        assert_eq!(record.members.private.get("count"), Some(&"int".to_string()));
        assert!(record.members.public.is_empty());
        assert!(!record.functions.is_empty());
    }

    #[test]
    fn test_function_spec_from_null() {
        assert_eq!(FunctionSpec::from(None), FunctionSpec::default());
    }
}
