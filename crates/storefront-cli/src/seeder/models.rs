//! Configuration for seed generation.
//!
//! A single count `n` drives every table; per-table volumes are fixed
//! multiples of it.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Rows generated per unit of `count` for each table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeScale {
    pub employees: usize,
    pub stores: usize,
    pub employment: usize,
    pub products: usize,
    pub inventory: usize,
    pub transactions: usize,
    pub suppliers: usize,
    pub orders: usize,
    pub users: usize,
}

impl Default for VolumeScale {
    fn default() -> Self {
        Self {
            employees: 10,
            stores: 1,
            employment: 12,
            products: 1,
            inventory: 10,
            transactions: 10,
            suppliers: 1,
            orders: 2,
            users: 1,
        }
    }
}

/// Target row counts for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableVolumes {
    pub roles: usize,
    pub employees: usize,
    pub stores: usize,
    /// Lower bound. Employment always holds at least one row per store.
    pub employment: usize,
    pub products: usize,
    pub inventory: usize,
    pub transactions: usize,
    pub suppliers: usize,
    pub orders: usize,
    pub users: usize,
}

/// Complete configuration for a generation run.
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    /// Base volume `n`. With the default scale and username vocabulary the
    /// users table caps it at [`DEFAULT_USERNAME_CAPACITY`] (139 860).
    ///
    /// [`DEFAULT_USERNAME_CAPACITY`]: super::users::DEFAULT_USERNAME_CAPACITY
    pub count: usize,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub scale: VolumeScale,
}

impl SeedConfig {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Builds a config from a signed count as accepted on the command line.
    /// Zero and negative counts produce empty tables.
    pub fn from_signed(count: i64) -> Self {
        Self::new(usize::try_from(count).unwrap_or(0))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_scale(mut self, scale: VolumeScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn volumes(&self) -> TableVolumes {
        let n = self.count;
        let s = &self.scale;
        TableVolumes {
            roles: n.min(storefront_models::RoleName::ALL.len()),
            employees: n.saturating_mul(s.employees),
            stores: n.saturating_mul(s.stores),
            employment: n.saturating_mul(s.employment),
            products: n.saturating_mul(s.products),
            inventory: n.saturating_mul(s.inventory),
            transactions: n.saturating_mul(s.transactions),
            suppliers: n.saturating_mul(s.suppliers),
            orders: n.saturating_mul(s.orders),
            users: n.saturating_mul(s.users),
        }
    }

    /// The root RNG for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
