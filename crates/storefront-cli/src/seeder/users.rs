//! Seed user generation.
//!
//! Usernames must be unique within a batch, so candidates are drawn from the
//! username producer and rejected on collision. The draw is bounded: a
//! vocabulary too small for the requested count ends in
//! [`DatagenError::InsufficientUniqueValues`] instead of looping forever.

use rand::Rng;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use storefront_core::DatagenError;
use storefront_models::{SeedUser, TableRow, UserId};

use super::scalars::{booleans, choice, fork, passwords};

/// Candidate draws allowed per requested user before giving up.
pub const MAX_ATTEMPTS_PER_USER: usize = 64;

pub const EMAIL_DOMAIN: &str = "example.com";

/// Numeric suffixes appended to the default username bases.
pub const DEFAULT_USERNAME_SUFFIXES: RangeInclusive<u32> = 10..=9_999;

/// Distinct usernames the default vocabulary can produce, and so the largest
/// user count [`build_users`] can satisfy.
pub const DEFAULT_USERNAME_CAPACITY: usize = USERNAME_BASES.len()
    * (*DEFAULT_USERNAME_SUFFIXES.end() - *DEFAULT_USERNAME_SUFFIXES.start() + 1) as usize;

const USERNAME_BASES: [&str; 14] = [
    "dragonslayer",
    "bargainhunter",
    "salessearcher",
    "genericcust1",
    "magnumdragon",
    "shroud",
    "xgod",
    "taz",
    "mark",
    "milkman",
    "masterblaster",
    "thunderous",
    "fireknight",
    "shovelfighter",
];

/// Where usernames come from: a list of bases, each optionally followed by a
/// random numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameVocabulary {
    bases: Vec<String>,
    suffixes: Option<RangeInclusive<u32>>,
}

impl Default for UsernameVocabulary {
    fn default() -> Self {
        Self {
            bases: USERNAME_BASES.iter().map(|b| b.to_string()).collect(),
            suffixes: Some(DEFAULT_USERNAME_SUFFIXES),
        }
    }
}

impl UsernameVocabulary {
    /// Bare usernames, no suffix.
    pub fn new<I, S>(bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bases: bases.into_iter().map(Into::into).collect(),
            suffixes: None,
        }
    }

    pub fn with_suffixes(mut self, suffixes: RangeInclusive<u32>) -> Self {
        self.suffixes = Some(suffixes);
        self
    }

    /// Upper bound on distinct usernames this vocabulary can produce.
    pub fn cardinality(&self) -> usize {
        let distinct: HashSet<&String> = self.bases.iter().collect();
        let suffixes = self
            .suffixes
            .as_ref()
            .map_or(1, |range| range.clone().count());
        distinct.len().saturating_mul(suffixes)
    }

    /// Username candidates. Empty when there are no bases.
    pub fn usernames<R: Rng>(&self, mut rng: R) -> impl Iterator<Item = String> + use<R> {
        let suffixes = self.suffixes.clone();
        let bases = choice::<String, _, _>(self.bases.clone(), fork(&mut rng));
        bases.map(move |base| match &suffixes {
            Some(range) => format!("{base}{}", rng.gen_range(range.clone())),
            None => base,
        })
    }
}

/// Generates `count` users from the default username vocabulary.
pub fn build_users<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<SeedUser>, DatagenError> {
    build_users_from(count, &UsernameVocabulary::default(), rng)
}

/// Generates `count` users with unique usernames drawn from `vocabulary`.
///
/// # Errors
///
/// [`DatagenError::InsufficientUniqueValues`] when `count` distinct usernames
/// could not be drawn within `count * MAX_ATTEMPTS_PER_USER` candidates.
pub fn build_users_from<R: Rng>(
    count: usize,
    vocabulary: &UsernameVocabulary,
    rng: &mut R,
) -> Result<Vec<SeedUser>, DatagenError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let max_attempts = count.saturating_mul(MAX_ATTEMPTS_PER_USER);
    let candidates = vocabulary
        .usernames(fork(rng))
        .zip(passwords(fork(rng)))
        .zip(booleans(fork(rng)))
        .take(max_attempts);

    let mut seen = HashSet::with_capacity(count);
    let mut users = Vec::with_capacity(count);
    let mut attempts = 0;

    for ((username, password), admin) in candidates {
        attempts += 1;
        if !seen.insert(username.clone()) {
            continue;
        }

        users.push(SeedUser {
            user_id: UserId::from_index(users.len()),
            email: format!("{username}@{EMAIL_DOMAIN}"),
            username,
            password: password.to_string(),
            admin,
        });

        if users.len() == count {
            return Ok(users);
        }
    }

    Err(DatagenError::InsufficientUniqueValues {
        table: SeedUser::TABLE.name,
        field: "username",
        requested: count,
        produced: users.len(),
        attempts,
    })
}
