use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Mapping whose selected keys decode as `T` while all other entries stay raw YAML
///
/// Values under selected keys are decoded strictly, so a malformed entry the
/// resolver depends on is still a decode error. Any other entry may have any
/// shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectiveMap<T> {
    typed: BTreeMap<String, T>,
    raw: BTreeMap<String, Value>,
}

impl<T> Default for SelectiveMap<T> {
    fn default() -> Self {
        Self {
            typed: BTreeMap::new(),
            raw: BTreeMap::new(),
        }
    }
}

impl<T> SelectiveMap<T> {
    /// The typed value under a selected key
    pub fn get(&self, key: &str) -> Option<&T> {
        self.typed.get(key)
    }

    /// The undecoded YAML under any other key
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.typed.contains_key(key) || self.raw.contains_key(key)
    }

    /// Stores a typed value, replacing any raw value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        self.raw.remove(&key);
        self.typed.insert(key, value)
    }

    /// Number of entries, typed and raw
    pub fn len(&self) -> usize {
        self.typed.len() + self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for SelectiveMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for SelectiveMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.typed {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in &self.raw {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Decodes a mapping, typing only the values under `selected` keys
///
/// Values are decoded while streaming, so scalars under typed keys keep the
/// YAML deserializer's leniency (a bare `1.21` still decodes into a `String`).
/// A null or empty document decodes to an empty map.
pub(crate) fn deserialize_selected<'de, D, T>(
    deserializer: D,
    selected: &'static [&'static str],
) -> Result<SelectiveMap<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_any(SelectiveMapVisitor {
        selected,
        marker: PhantomData,
    })
}

struct SelectiveMapVisitor<T> {
    selected: &'static [&'static str],
    marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for SelectiveMapVisitor<T> {
    type Value = SelectiveMap<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SelectiveMap::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SelectiveMap::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = SelectiveMap::default();
        while let Some(key) = access.next_key::<String>()? {
            if self.selected.contains(&key.as_str()) {
                let value = access.next_value::<T>()?;
                map.raw.remove(&key);
                map.typed.insert(key, value);
            } else {
                let value = access.next_value::<Value>()?;
                map.raw.insert(key, value);
            }
        }
        Ok(map)
    }
}
