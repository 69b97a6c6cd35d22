//! Age ordering and rank lookup
//!
//! Ranking sorts the collection by age ascending with a stable insertion sort
//! and then counts positions from the end: the oldest member of a collection
//! of size `n` ranks 1, the youngest ranks `n`.
//!
//! # Mutation
//!
//! [`sort_users`], [`find_rank`] and [`rank_user`] reorder the slice they are
//! given. Use [`rank_user_in`] to rank against a sorted copy instead.

use crate::core::user::{User, age_of};

/// Value returned by [`rank_user`] when no record matches the target
pub const RANK_NOT_FOUND: isize = -1;

/// Stable in-place insertion sort.
///
/// Each element from index 1 onward is shifted left past every preceding
/// element for which `is_greater(preceding, current)` holds, stopping at the
/// first one for which it does not.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && is_greater(&items[j - 1], &items[j]) {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sort users by numeric age, youngest first.
///
/// Equal ages keep their input order. Records whose age is not numeric
/// compare as neither greater nor smaller than anything, so the sort never
/// moves another record past them.
pub fn sort_users(users: &mut [User]) -> &[User] {
    insertion_sort_by(users, |a, b| age_of(a) > age_of(b));
    users
}

/// Sort `users` in place and return the rank of the first record equal to
/// `user`, or `None` when there is no such record.
///
/// With duplicates, the first match in sorted order wins, which is the
/// highest rank among them.
pub fn find_rank(user: &User, users: &mut [User]) -> Option<usize> {
    let sorted = sort_users(users);
    let rank = position_rank(user, sorted);

    match rank {
        Some(rank) => tracing::debug!(
            name = %user.name,
            surname = %user.surname,
            rank,
            total = sorted.len(),
            "Ranked user"
        ),
        None => tracing::debug!(
            name = %user.name,
            surname = %user.surname,
            total = sorted.len(),
            "User not found in collection"
        ),
    }

    rank
}

/// Rank `user` within `users`, returning [`RANK_NOT_FOUND`] when absent.
///
/// Sorts `users` in place as a side effect.
pub fn rank_user(user: &User, users: &mut [User]) -> isize {
    find_rank(user, users).map_or(RANK_NOT_FOUND, |rank| rank as isize)
}

/// Rank `user` against a sorted copy of `users`, leaving the input untouched
pub fn rank_user_in(user: &User, users: &[User]) -> Option<usize> {
    let mut copy = users.to_vec();
    find_rank(user, &mut copy)
}

fn position_rank(user: &User, sorted: &[User]) -> Option<usize> {
    sorted
        .iter()
        .position(|candidate| candidate.same_user(user))
        .map(|index| sorted.len() - index)
}
