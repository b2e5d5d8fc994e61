//! Scalar value producers.
//!
//! Each producer is a lazy, infinite iterator that owns its own RNG, so two
//! calls never share state. Builders fork a fresh RNG from their parent for
//! every producer they create, which keeps a seeded run reproducible.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rust_decimal::Decimal;

const FIRST_NAMES: [&str; 27] = [
    "Bob", "Ross", "Robert", "Sally", "Alice", "Jake", "Ian", "Kevin", "Brad", "Steven", "Charles",
    "Ashley", "John", "James", "Jacob", "Mark", "Michael", "Edward", "Donald", "Zachary", "Sean",
    "Blake", "Jennifer", "Sarah", "Yao", "Brandon", "Albert",
];

const LAST_NAMES: [&str; 18] = [
    "Johnson", "Smith", "Williams", "Brown", "Jackson", "Ming", "Zhang", "Jefferson", "Thomas",
    "Taylor", "Moore", "Loss", "Davis", "Garcia", "Miller", "Jones", "Wilson", "Less",
];

const STREET_NAMES: [&str; 9] = [
    "Freedom",
    "Fletcher",
    "Independence",
    "Fowler",
    "Cherry",
    "Applebee",
    "Clark",
    "Kennedy",
    "Bourbon",
];

const STREET_TYPES: [&str; 7] = [
    "Lane",
    "Boulevard",
    "Road",
    "Parkway",
    "Drive",
    "Street",
    "Avenue",
];

/// (city, state) pairs. Cities are never sampled apart from their state.
const CITIES: [(&str, &str); 9] = [
    ("Jacksonville", "Florida"),
    ("Tampa", "Florida"),
    ("New York City", "New York"),
    ("Chicago", "Illinois"),
    ("China", "Illinois"),
    ("Atlanta", "Georgia"),
    ("San Diego", "California"),
    ("San Francisco", "California"),
    ("Carlsbad", "California"),
];

const PRODUCT_NAMES: [&str; 24] = [
    "Xbox One",
    "Nintendo Switch",
    "Hammer",
    "Wrench",
    "Screwdriver",
    "Kiddie Pool",
    "Playstation 4",
    "Praystation",
    "Sony DVDMax300",
    "Alternator 10k",
    "Kit Kat",
    "Oreos (6 pack)",
    "Ab-dominator",
    "Velcro strips",
    "Rope",
    "Chain (100 feet, 2-inch)",
    "Chainsaw",
    "Desert Eagle",
    "Gerbil",
    "Chinchilla",
    "German Shepherd",
    "Goat",
    "Dynamit",
    "Extension Cord (50 feet)",
];

const COLORS: [&str; 12] = [
    "Red", "Blue", "Green", "White", "Black", "Brown", "Orange", "Yellow", "Purple", "Pink",
    "Teal", "Maroon",
];

/// Supplier names. Deliberately smaller than typical volumes; supplier rows
/// cycle through it.
pub const SUPPLIER_NAMES: [&str; 3] = [
    "We Sell Everything",
    "Ants in My Eyes Johnson Electronics",
    "Tools 'R' Us",
];

const PASSWORDS: [&str; 7] = [
    "Hunter2",
    "__Hunter2",
    "Password",
    "P@$$W0rd",
    "Adm1n",
    "SodiumB1c4rb0n4t3",
    "Def4ult5",
];

/// Forks an independent RNG off `rng`.
pub fn fork(rng: &mut impl RngCore) -> StdRng {
    StdRng::seed_from_u64(rng.next_u64())
}

/// Picks one element uniformly. `items` must be non-empty; builders check
/// their upstream row sets before sampling them.
pub(crate) fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Uniform draws from `vocabulary`. An empty vocabulary yields an empty
/// sequence instead of panicking.
pub fn choice<T, V, R>(vocabulary: V, mut rng: R) -> impl Iterator<Item = T>
where
    T: Clone,
    V: AsRef<[T]>,
    R: Rng,
{
    std::iter::from_fn(move || {
        let items = vocabulary.as_ref();
        if items.is_empty() {
            None
        } else {
            Some(pick(items, &mut rng).clone())
        }
    })
}

/// Closed decimal interval `[min, max]` sampled at a fixed number of decimal
/// places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalRange {
    pub min: i64,
    pub max: i64,
    pub precision: u32,
}

impl DecimalRange {
    /// Most decimal places a range samples at.
    pub const MAX_PRECISION: u32 = 18;

    /// `precision` is the number of decimal places, clamped to
    /// [`Self::MAX_PRECISION`].
    pub const fn new(min: i64, max: i64, precision: u32) -> Self {
        Self {
            min,
            max,
            precision: if precision > Self::MAX_PRECISION {
                Self::MAX_PRECISION
            } else {
                precision
            },
        }
    }

    /// Samples an integer over the scaled range and scales it back down, so
    /// every value lands exactly on the precision grid.
    ///
    /// Scaled bounds that do not fit in an `i64` mantissa saturate, which
    /// narrows very wide ranges at high precision.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal {
        let precision = self.precision.min(Self::MAX_PRECISION);
        let scale = 10_i64.pow(precision);
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let mantissa = rng.gen_range(lo.saturating_mul(scale)..=hi.saturating_mul(scale));
        Decimal::new(mantissa, precision)
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= Decimal::from(self.min.min(self.max))
            && value <= Decimal::from(self.max.max(self.min))
            && value.round_dp(self.precision) == value
    }
}

/// Decimals uniform over `[min, max]` at `precision` places.
pub fn decimals<R: Rng>(min: i64, max: i64, precision: u32, rng: R) -> impl Iterator<Item = Decimal> {
    decimals_in(DecimalRange::new(min, max, precision), rng)
}

pub fn decimals_in<R: Rng>(range: DecimalRange, mut rng: R) -> impl Iterator<Item = Decimal> {
    std::iter::repeat_with(move || range.sample(&mut rng))
}

pub fn booleans<R: Rng>(mut rng: R) -> impl Iterator<Item = bool> {
    std::iter::repeat_with(move || rng.gen_bool(0.5))
}

pub fn first_names<R: Rng>(rng: R) -> impl Iterator<Item = &'static str> {
    choice(FIRST_NAMES, rng)
}

pub fn last_names<R: Rng>(rng: R) -> impl Iterator<Item = &'static str> {
    choice(LAST_NAMES, rng)
}

/// Street addresses such as `4521 Cherry Lane`.
pub fn addresses<R: Rng>(mut rng: R) -> impl Iterator<Item = String> {
    std::iter::repeat_with(move || {
        let number = rng.gen_range(100..=10_000);
        let street = pick(&STREET_NAMES, &mut rng);
        let suffix = pick(&STREET_TYPES, &mut rng);
        format!("{number} {street} {suffix}")
    })
}

/// (city, state) pairs drawn together.
pub fn cities<R: Rng>(rng: R) -> impl Iterator<Item = (&'static str, &'static str)> {
    choice(CITIES, rng)
}

pub fn zip_codes<R: Rng>(mut rng: R) -> impl Iterator<Item = String> {
    std::iter::repeat_with(move || rng.gen_range(10_000..=99_999).to_string())
}

/// Phone numbers formatted `AAA-PPP-LLLL`.
pub fn phone_numbers<R: Rng>(mut rng: R) -> impl Iterator<Item = String> {
    std::iter::repeat_with(move || {
        let area = rng.gen_range(100..=999);
        let prefix = rng.gen_range(100..=999);
        let line = rng.gen_range(1000..=9999);
        format!("{area}-{prefix}-{line}")
    })
}

pub fn product_names<R: Rng>(rng: R) -> impl Iterator<Item = &'static str> {
    choice(PRODUCT_NAMES, rng)
}

pub fn colors<R: Rng>(rng: R) -> impl Iterator<Item = &'static str> {
    choice(COLORS, rng)
}

pub fn passwords<R: Rng>(rng: R) -> impl Iterator<Item = &'static str> {
    choice(PASSWORDS, rng)
}
