//! Store generation.

use rand::Rng;
use storefront_models::{Store, StoreId};

use super::scalars::{addresses, cities, fork, phone_numbers, zip_codes};

/// Generates `count` stores with ids 1..=count.
pub fn build_stores<R: Rng>(count: usize, rng: &mut R) -> Vec<Store> {
    let addresses = addresses(fork(rng));
    let cities = cities(fork(rng));
    let zips = zip_codes(fork(rng));
    let phones = phone_numbers(fork(rng));

    addresses
        .zip(cities)
        .zip(zips)
        .zip(phones)
        .take(count)
        .enumerate()
        .map(|(i, (((address, (city, state)), zip), phone))| Store {
            store_id: StoreId::from_index(i),
            address,
            city: city.to_string(),
            state: state.to_string(),
            zip,
            phone,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_stores() {
        let stores = build_stores(25, &mut StdRng::seed_from_u64(3));
        assert_eq!(stores.len(), 25);

        for (i, store) in stores.iter().enumerate() {
            assert_eq!(store.store_id.get(), i as i64 + 1);
            assert_eq!(store.zip.len(), 5);
            assert_eq!(store.phone.len(), 12);
            assert!(!store.address.is_empty());
        }
    }

    #[test]
    fn test_city_and_state_stay_paired() {
        let stores = build_stores(200, &mut StdRng::seed_from_u64(4));
        for store in &stores {
            let expected = match store.city.as_str() {
                "Jacksonville" | "Tampa" => "Florida",
                "New York City" => "New York",
                "Chicago" | "China" => "Illinois",
                "Atlanta" => "Georgia",
                "San Diego" | "San Francisco" | "Carlsbad" => "California",
                other => panic!("unexpected city {other}"),
            };
            assert_eq!(store.state, expected);
        }
    }

    #[test]
    fn test_build_zero_stores() {
        assert!(build_stores(0, &mut StdRng::seed_from_u64(5)).is_empty());
    }
}
