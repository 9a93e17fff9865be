//! Sets of character classes.

use super::CharacterClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of [`CharacterClass`] values.
///
/// Iteration always follows canonical class order, regardless of
/// insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<CharacterClass>", into = "Vec<CharacterClass>")]
pub struct ClassSet {
    members: [bool; 4],
}

impl ClassSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self { members: [false; 4] }
    }

    /// The set of all four classes.
    pub const fn all() -> Self {
        Self { members: [true; 4] }
    }

    /// Returns a copy of this set with `class` added.
    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    /// Adds a class to the set.
    pub fn insert(&mut self, class: CharacterClass) {
        self.members[class.index()] = true;
    }

    /// Removes a class from the set.
    pub fn remove(&mut self, class: CharacterClass) {
        self.members[class.index()] = false;
    }

    /// Returns true if the set contains `class`.
    #[inline]
    pub fn contains(&self, class: CharacterClass) -> bool {
        self.members[class.index()]
    }

    /// Number of classes in the set.
    pub fn len(&self) -> usize {
        self.members.iter().filter(|&&m| m).count()
    }

    /// Returns true if no class is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates selected classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Concatenation of the selected alphabets, in canonical order.
    pub fn pool(&self) -> Vec<u8> {
        self.iter()
            .flat_map(|class| class.alphabet().iter().copied())
            .collect()
    }

    /// Returns true if `c` belongs to any selected class.
    pub fn admits(&self, c: char) -> bool {
        self.iter().any(|class| class.contains(c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl From<Vec<CharacterClass>> for ClassSet {
    fn from(classes: Vec<CharacterClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<ClassSet> for Vec<CharacterClass> {
    fn from(set: ClassSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for class in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", class)?;
            first = false;
        }
        Ok(())
    }
}
