//! Owned user collection

use crate::core::rank::{find_rank, rank_user_in, sort_users};
use crate::core::user::{User, add_user};

/// A single-owner, in-memory collection of users.
///
/// Insertion order is kept until the registry is sorted or ranked, both of
/// which reorder it in place. There is no uniqueness constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Wrap an existing collection without reordering it
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Append a user
    pub fn add(&mut self, user: User) {
        add_user(user, &mut self.users);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check whether a record with the same three fields is present
    pub fn contains(&self, user: &User) -> bool {
        self.users.iter().any(|u| u.same_user(user))
    }

    /// Users in their current order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn into_users(self) -> Vec<User> {
        self.users
    }

    /// Sort by age ascending in place
    pub fn sort(&mut self) -> &[User] {
        sort_users(&mut self.users)
    }

    /// Rank a user, sorting the registry in place first
    pub fn rank(&mut self, user: &User) -> Option<usize> {
        find_rank(user, &mut self.users)
    }

    /// Rank a user without reordering the registry
    pub fn rank_of(&self, user: &User) -> Option<usize> {
        rank_user_in(user, &self.users)
    }
}

impl From<Vec<User>> for UserRegistry {
    fn from(users: Vec<User>) -> Self {
        Self::from_users(users)
    }
}

impl FromIterator<User> for UserRegistry {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self::from_users(iter.into_iter().collect())
    }
}

impl Extend<User> for UserRegistry {
    fn extend<I: IntoIterator<Item = User>>(&mut self, iter: I) {
        for user in iter {
            self.add(user);
        }
    }
}

impl IntoIterator for UserRegistry {
    type Item = User;
    type IntoIter = std::vec::IntoIter<User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.into_iter()
    }
}

impl<'a> IntoIterator for &'a UserRegistry {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}
