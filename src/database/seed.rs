use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: usize,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Join our competitive basketball team and participate in league games",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["alex@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Learn tennis skills and compete in friendly matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "rachel@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing, and mixed media techniques",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Music Ensemble",
        description: "Perform in our school orchestra and chamber ensembles",
        schedule: "Mondays and Thursdays, 4:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["noah@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and critical thinking skills through debate",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Conduct experiments and explore advanced scientific concepts",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["mia@mergington.edu", "ethan@mergington.edu"],
    },
];

/// The activities every fresh registry starts with, in display order.
pub fn seed_activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| Activity {
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            schedule: seed.schedule.to_string(),
            max_participants: seed.max_participants,
            participants: seed.participants.iter().copied().collect(),
        })
        .collect()
}
