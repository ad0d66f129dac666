use crate::activity::Activity;
use crate::error::Result;
use crate::roster::Roster;
use std::path::Path;

/// The built-in Mergington High School catalog, in listing order.
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Competitive basketball team practicing drills and playing interschool games",
            "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
            15,
        )
        .with_participants(["alex@mergington.edu"]),
        Activity::new(
            "Tennis Club",
            "Improve your serve and volley with weekly coaching and friendly matches",
            "Tuesdays and Saturdays, 10:00 AM - 12:00 PM",
            10,
        )
        .with_participants(["ryan@mergington.edu"]),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing, and mixed media in an open studio",
            "Thursdays, 3:30 PM - 5:30 PM",
            18,
        )
        .with_participants(["mia@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Act, direct, and stage productions for the school theater",
            "Wednesdays, 3:30 PM - 5:30 PM",
            25,
        )
        .with_participants(["lucas@mergington.edu", "ava@mergington.edu"]),
        Activity::new(
            "Science Club",
            "Hands-on experiments and preparation for the regional science fair",
            "Fridays, 2:00 PM - 3:30 PM",
            20,
        )
        .with_participants(["noah@mergington.edu"]),
        Activity::new(
            "Debate Team",
            "Build argumentation skills and compete in debate tournaments",
            "Tuesdays, 4:00 PM - 5:30 PM",
            16,
        )
        .with_participants(["isabella@mergington.edu", "ethan@mergington.edu"]),
    ]
}

/// Read a YAML seed file: a sequence of activities with a `name` field each.
pub fn load(path: &Path) -> Result<Vec<Activity>> {
    let data = std::fs::read_to_string(path)?;
    let activities: Vec<Activity> = serde_yaml::from_str(&data)?;
    tracing::debug!(path = %path.display(), count = activities.len(), "loaded seed file");
    Ok(activities)
}

/// Load and validate a seed file into a ready roster.
pub fn load_roster(path: &Path) -> Result<Roster> {
    Roster::new(load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use tempfile::TempDir;

    #[test]
    fn default_catalog_is_valid() {
        let roster = Roster::new(default_activities()).unwrap();
        for name in [
            "Basketball Team",
            "Chess Club",
            "Programming Class",
            "Tennis Club",
            "Art Studio",
            "Drama Club",
            "Science Club",
        ] {
            let activity = roster.get(name).unwrap_or_else(|| panic!("missing {name}"));
            assert!(!activity.participants.is_empty(), "{name} has no participants");
        }
        assert!(roster
            .get("Basketball Team")
            .unwrap()
            .has_participant("alex@mergington.edu"));
    }

    #[test]
    fn load_reads_yaml_sequence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::write(
            &path,
            "- name: Robotics\n  description: Build robots\n  schedule: Mondays\n  max_participants: 8\n  participants:\n    - kai@mergington.edu\n- name: Choir\n  description: Sing\n  schedule: Fridays\n  max_participants: 40\n",
        )
        .unwrap();

        let activities = load(&path).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].name, "Robotics");
        assert_eq!(activities[0].participants, vec!["kai@mergington.edu"]);
        assert!(activities[1].participants.is_empty());
    }

    #[test]
    fn load_roster_rejects_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::write(
            &path,
            "- name: Choir\n  description: a\n  schedule: b\n  max_participants: 1\n- name: Choir\n  description: a\n  schedule: b\n  max_participants: 1\n",
        )
        .unwrap();
        assert!(matches!(
            load_roster(&path),
            Err(RosterError::DuplicateActivity(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::write(&path, "- name: [unterminated\n").unwrap();
        assert!(matches!(load(&path), Err(RosterError::Yaml(_))));
    }
}
