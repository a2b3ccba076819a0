use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One extracurricular activity and its roster.
///
/// `name` is the catalog key, so it is not part of the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

/// Ordered snapshot of every activity, keyed by name on the wire.
///
/// Serializes as a JSON object in listing order. Deserializing keeps the
/// key order of the input document and fills each record's `name` from its key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, ActivityRecord>")]
pub struct ActivityCatalog(IndexMap<String, ActivityRecord>);

impl ActivityCatalog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.0.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, String, ActivityRecord> {
        self.0.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn into_vec(self) -> Vec<ActivityRecord> {
        self.0.into_values().collect()
    }
}

impl From<IndexMap<String, ActivityRecord>> for ActivityCatalog {
    fn from(mut activities: IndexMap<String, ActivityRecord>) -> Self {
        for (name, record) in activities.iter_mut() {
            record.name.clone_from(name);
        }
        Self(activities)
    }
}

impl FromIterator<ActivityRecord> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = ActivityRecord>>(iter: I) -> Self {
        Self(iter.into_iter().map(|a| (a.name.clone(), a)).collect())
    }
}

impl From<Vec<ActivityRecord>> for ActivityCatalog {
    fn from(activities: Vec<ActivityRecord>) -> Self {
        activities.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a ActivityRecord;
    type IntoIter = indexmap::map::Values<'a, String, ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}
