use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::SeedError;
use crate::models::{ActivityCatalog, ActivityRecord};

// name, description, schedule, max_participants, participants
type SeedRow = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const SEED_ACTIVITIES: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Wednesdays, 4:00 PM - 5:30 PM",
        18,
        &["alex@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Basketball Club",
        "Practice basketball skills and play friendly games",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["mia@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Art Workshop",
        "Explore painting, drawing, and sculpture techniques",
        "Mondays, 4:00 PM - 5:30 PM",
        16,
        &["ava@mergington.edu", "liam@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce school plays and performances",
        "Fridays, 3:30 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "jack@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Prepare for math competitions and solve challenging problems",
        "Tuesdays, 4:00 PM - 5:00 PM",
        10,
        &["ethan@mergington.edu", "chloe@mergington.edu"],
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Thursdays, 4:00 PM - 5:30 PM",
        14,
        &["ben@mergington.edu", "zoe@mergington.edu"],
    ),
];

/// The canonical school activities the service starts with.
pub fn default_seed() -> Vec<ActivityRecord> {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            ActivityRecord::new(*name, *description, *schedule, *max)
                .with_participants(participants.iter().copied())
        })
        .collect()
}

/// Reads a seed from a JSON document shaped like `GET /activities`.
pub fn load_seed_file(path: &Path) -> Result<Vec<ActivityRecord>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog: ActivityCatalog = serde_json::from_str(&raw)?;
    let activities = catalog.into_vec();
    validate_seed(&activities)?;
    info!(
        "Loaded {} activities from seed file {}",
        activities.len(),
        path.display()
    );
    Ok(activities)
}

/// Seed file when one is configured, the built-in seed otherwise.
pub fn load_seed(path: Option<&Path>) -> Result<Vec<ActivityRecord>, SeedError> {
    match path {
        Some(p) => load_seed_file(p),
        None => Ok(default_seed()),
    }
}

pub fn validate_seed(activities: &[ActivityRecord]) -> Result<(), SeedError> {
    let mut names = HashSet::new();
    for activity in activities {
        if activity.name.trim().is_empty() {
            return Err(SeedError::EmptyName);
        }
        if !names.insert(activity.name.as_str()) {
            return Err(SeedError::DuplicateActivity(activity.name.clone()));
        }
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity(activity.name.clone()));
        }

        let mut emails = HashSet::new();
        for email in &activity.participants {
            if !emails.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: activity.name.clone(),
                    email: email.clone(),
                });
            }
        }

        if activity.participants.len() > activity.max_participants as usize {
            return Err(SeedError::OverCapacity {
                activity: activity.name.clone(),
                count: activity.participants.len(),
                max: activity.max_participants,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub activities: usize,
    pub participants: usize,
    pub open_spots: usize,
    pub full_activities: usize,
}

pub fn summarize(activities: &[ActivityRecord]) -> SeedReport {
    activities
        .iter()
        .fold(SeedReport::default(), |mut report, activity| {
            report.activities += 1;
            report.participants += activity.participants.len();
            report.open_spots += activity.spots_left();
            if activity.is_full() {
                report.full_activities += 1;
            }
            report
        })
}
