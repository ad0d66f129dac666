use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// An extracurricular offering and its current participants.
///
/// `name` is the roster key. It is read from seed files but left out of the
/// serialized body, since listings are keyed by name already.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Reported, never enforced.
    pub max_participants: u32,
    /// Emails in signup order, each at most once.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
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

    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = emails.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Free places according to the advisory capacity, saturating at zero.
    pub fn spots_left(&self) -> u32 {
        let enrolled = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(enrolled)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Ordered snapshot of the roster.
///
/// Serializes as a JSON object keyed by activity name, emitting entries in
/// roster order rather than sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(pub Vec<Activity>);

impl Catalog {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spots_left_saturates() {
        let full = Activity::new("Chess Club", "d", "s", 1)
            .with_participants(["a@mergington.edu", "b@mergington.edu"]);
        assert_eq!(full.spots_left(), 0);

        let open = Activity::new("Chess Club", "d", "s", 12).with_participants(["a@mergington.edu"]);
        assert_eq!(open.spots_left(), 11);
    }

    #[test]
    fn activity_body_omits_name() {
        let a = Activity::new("Chess Club", "Learn strategies", "Fridays", 12)
            .with_participants(["michael@mergington.edu"]);
        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["max_participants"], 12);
        assert_eq!(json["participants"][0], "michael@mergington.edu");
    }

    #[test]
    fn catalog_keeps_roster_order_in_json_text() {
        let catalog = Catalog(vec![
            Activity::new("Zumba", "d", "s", 5),
            Activity::new("Archery", "d", "s", 5),
        ]);
        let text = serde_json::to_string(&catalog).unwrap();
        let zumba = text.find("\"Zumba\"").unwrap();
        let archery = text.find("\"Archery\"").unwrap();
        assert!(zumba < archery, "expected insertion order in {text}");
    }

    #[test]
    fn catalog_lookup_by_name() {
        let catalog = Catalog(vec![Activity::new("Drama Club", "d", "s", 20)]);
        assert!(catalog.get("Drama Club").is_some());
        assert!(catalog.get("drama club").is_none());
        assert_eq!(catalog.len(), 1);
    }
}
