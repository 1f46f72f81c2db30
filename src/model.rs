// src/model.rs
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

/// One activity as served by `GET /activities`. The name is the map key on the
/// wire and is filled in while decoding the collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub max_participants: i64,
    #[serde(default, deserialize_with = "participants_or_empty")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server reports more participants
    /// than seats; never clamped.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

// Anything other than an array of strings renders as an empty roster.
fn participants_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Activities in the order the server listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }
}

struct CollectionVisitor;

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = ActivityCollection;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping activity names to activities")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut activities: Vec<Activity> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, mut activity)) = map.next_entry::<String, Activity>()? {
            activity.name = name;
            // Duplicate keys: last one wins, like JSON.parse, but keep first position.
            if let Some(slot) = activities.iter_mut().find(|a| a.name == activity.name) {
                *slot = activity;
            } else {
                activities.push(activity);
            }
        }
        Ok(ActivityCollection { activities })
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CollectionVisitor)
    }
}
