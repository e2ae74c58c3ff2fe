//! Renderable bodies of the synthetic system

use nalgebra::Point3;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::DisplayColor;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Role of a body in the generated system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum CelestialKind {
    /// The host star, always at the origin
    Star,
    /// The object the prediction was made for
    Exoplanet,
    /// Randomized context planet
    Planet,
}

impl CelestialKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Exoplanet => "Exoplanet",
            Self::Planet => "Planet",
        }
    }
}

impl std::fmt::Display for CelestialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A displayable detail value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for InfoValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for InfoValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for InfoValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for InfoValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InfoValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Insertion-ordered label → value details shown when a body is selected
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoMap(Vec<(String, InfoValue)>);

impl InfoMap {
    pub const NAME: &'static str = "Name";
    pub const TYPE: &'static str = "Type";

    /// Start a map with its mandatory `Name` entry
    pub fn named(name: impl Into<String>) -> Self {
        Self(vec![(Self::NAME.to_string(), InfoValue::Text(name.into()))])
    }

    /// Builder-style insert
    pub fn with(mut self, label: impl Into<String>, value: impl Into<InfoValue>) -> Self {
        self.insert(label, value);
        self
    }

    /// Insert or replace a value; a replaced label keeps its position
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<InfoValue>) {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == label) {
            Some(entry) => entry.1 = value,
            None => self.0.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&InfoValue> {
        self.0
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value)
    }

    pub fn name(&self) -> Option<&InfoValue> {
        self.get(Self::NAME)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InfoValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Entries shown in the detail panel (everything except `Name`)
    pub fn details(&self) -> impl Iterator<Item = (&str, &InfoValue)> {
        self.iter().filter(|(key, _)| *key != Self::NAME)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for InfoMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InfoMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InfoMapVisitor;

        impl<'de> Visitor<'de> for InfoMapVisitor {
            type Value = InfoMap;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of labels to strings or numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<InfoMap, A::Error> {
                let mut info = InfoMap::default();
                while let Some((key, value)) = access.next_entry::<String, InfoValue>()? {
                    info.insert(key, value);
                }
                Ok(info)
            }
        }

        deserializer.deserialize_map(InfoMapVisitor)
    }
}

/// A body placed on the system's radial axis
///
/// `radius` and `distance` are visual scale values, not physical units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CelestialObject {
    /// Unique within one generated system
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CelestialKind,
    pub radius: f64,
    pub distance: f64,
    #[cfg_attr(feature = "tsify", tsify(type = "string"))]
    pub color: DisplayColor,
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, string | number>"))]
    pub info: InfoMap,
}

impl CelestialObject {
    /// Scene position: bodies line up along +x from the star
    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.distance, 0.0, 0.0)
    }

    /// Hover text, e.g. "Planet B (Rocky Planet)"
    ///
    /// Falls back to the body kind when there is no `Type` entry.
    pub fn label(&self) -> String {
        let name = self
            .info
            .name()
            .map(ToString::to_string)
            .unwrap_or_else(|| self.id.clone());
        let kind = self
            .info
            .get(InfoMap::TYPE)
            .map(ToString::to_string)
            .unwrap_or_else(|| self.kind.to_string());
        format!("{} ({})", name, kind)
    }
}
