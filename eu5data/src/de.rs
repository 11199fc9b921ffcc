//! Lenient field deserializers.
//!
//! The extraction tool copies values straight out of game script, so a field
//! that is usually a string can show up as a list, a number or a nested block.
//! These helpers keep the strings and drop the rest instead of failing the load.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single id, or the first string of a list.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Array(items)) => items.into_iter().find_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        }),
        _ => None,
    })
}

/// A set of ids written either as one string or as a list.
pub fn id_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(dedup(strings(value)))
}

/// Like [`id_set`], but drops scope prefixes (`religion:catholic` becomes
/// `catholic`) so the ids match the reference tables.
pub fn scoped_id_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let ids = strings(value)
        .into_iter()
        .map(|id| match id.rsplit_once(':') {
            Some((_, bare)) => bare.to_string(),
            None => id,
        })
        .filter(|id| !id.is_empty())
        .collect();
    Ok(dedup(ids))
}

fn strings(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Order preserved, duplicates dropped.
fn dedup(mut ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
    ids
}

/// `true`/`false`, treating anything else (including `"yes"`) loosely.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s == "yes" || s == "true",
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_id")]
        single: Option<String>,
        #[serde(default, deserialize_with = "id_set")]
        many: Vec<String>,
        #[serde(default, deserialize_with = "flag")]
        on: bool,
        #[serde(default, deserialize_with = "scoped_id_set")]
        scoped: Vec<String>,
    }

    #[test]
    fn test_string_or_list() {
        let p: Probe = serde_json::from_str(r#"{ "single": ["a", "b"], "many": "x" }"#).unwrap();
        assert_eq!(p.single.as_deref(), Some("a"));
        assert_eq!(p.many, vec!["x"]);
        assert!(!p.on);
    }

    #[test]
    fn test_non_strings_dropped() {
        let p: Probe = serde_json::from_str(
            r#"{ "single": { "type": "x" }, "many": ["a", 3, {"b": 1}, "a", "c"], "on": "yes" }"#,
        )
        .unwrap();
        assert!(p.single.is_none());
        assert_eq!(p.many, vec!["a", "c"]);
        assert!(p.on);
    }

    #[test]
    fn test_missing_and_null() {
        let p: Probe = serde_json::from_str(r#"{ "many": null }"#).unwrap();
        assert!(p.single.is_none());
        assert!(p.many.is_empty());
    }

    #[test]
    fn test_scope_prefixes_stripped() {
        let p: Probe = serde_json::from_str(
            r#"{ "scoped": ["religion:catholic", "catholic", "orthodox", "culture:"] }"#,
        )
        .unwrap();
        assert_eq!(p.scoped, vec!["catholic", "orthodox"]);

        let p: Probe = serde_json::from_str(r#"{ "scoped": "culture:breton" }"#).unwrap();
        assert_eq!(p.scoped, vec!["breton"]);
    }
}
