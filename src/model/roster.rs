use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::person::Person;

/// The long-lived list of people, newest first.
///
/// Order is for display only; allocation walks it but treats it as the
/// first-come-first-served tie-break and nothing more.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub(crate) people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: Id<Person>) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: Id<Person>) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.id == id)
    }
}
