use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use yew::AttrValue;

/// Wrap `text` as a CSS string literal, escaping embedded double quotes.
///
/// Only `"` is escaped. Backslashes and other characters pass through
/// untouched, so the stylesheet sees the text exactly as written.
#[must_use]
pub fn escape_content(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Whether `key: value` can sit in a declaration list without bleeding
/// into its neighbours.
///
/// The value must close every string and bracket it opens, contain no
/// newline, and have no `;` or braces outside a string.
#[must_use]
pub fn is_isolated_declaration(key: &str, value: &str) -> bool {
    let key_ok = !key.is_empty()
        && !key.chars().any(|ch| {
            ch.is_whitespace() || matches!(ch, ';' | ':' | '"' | '\'' | '\\' | '{' | '}')
        });
    key_ok && value_is_closed(value)
}

fn value_is_closed(value: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut depth = 0_usize;
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (_, '\n' | '\r' | '\u{c}') => return false,
            (_, '\\') => {
                if chars.next().is_none() {
                    return false;
                }
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ';' | '{' | '}') => return false,
            (None, _) => {}
        }
    }
    quote.is_none() && depth == 0
}

/// Ordered map of CSS custom properties for the button's inline style.
///
/// Inserting an existing key replaces its value in place; new keys keep
/// insertion order, including when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleMap {
    entries: Vec<(AttrValue, AttrValue)>,
}

impl StyleMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `key` to `value`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<AttrValue>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialise as an inline declaration list, e.g. `--a: 1; --b: 2`.
    ///
    /// Entries that would swallow the declarations after them are left out
    /// of the list; the rendered button still applies them one property at
    /// a time once mounted.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.iter()
            .filter(|(key, value)| {
                let isolated = is_isolated_declaration(key, value);
                if !isolated {
                    log::warn!("leaving {key} out of the inline style attribute");
                }
                isolated
            })
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<AttrValue>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for StyleMap
where
    K: Into<AttrValue>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct StyleMapVisitor;

impl<'de> Visitor<'de> for StyleMapVisitor {
    type Value = StyleMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of custom property names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = StyleMap::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StyleMapVisitor)
    }
}
