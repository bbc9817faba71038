use serde::Serialize;

// Activities are keyed by name; the name is the JSON object key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Participants,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

/// Participant emails in signup order. An email appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Participants(Vec<String>);

impl Participants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|p| p == email)
    }

    /// Appends `email` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if self.contains(&email) {
            return false;
        }
        self.0.push(email);
        true
    }

    /// Removes `email`, keeping the order of the remaining participants.
    pub fn remove(&mut self, email: &str) -> bool {
        match self.0.iter().position(|p| p == email) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Participants {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut participants = Participants::new();
        for email in iter {
            participants.insert(email);
        }
        participants
    }
}
