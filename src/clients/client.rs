use std::hash::{Hash, Hasher};

/// A registered bank client. The passport is the only identity key.
#[derive(Debug, Clone)]
pub struct Client {
    name: String,
    passport: String,
}

impl Client {
    pub fn new(name: impl Into<String>, passport: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passport: passport.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passport(&self) -> &str {
        &self.passport
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.passport == other.passport
    }
}

impl Eq for Client {}

impl Hash for Client {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.passport.hash(state);
    }
}
