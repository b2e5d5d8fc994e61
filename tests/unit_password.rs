use storefront::{hash_password, verify_password};
use storefront_core::password::SEED_HASH_COST;

#[test]
fn test_hash_password_success() {
    let password = "Hunter2";
    let result = hash_password(password, SEED_HASH_COST);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_password_empty() {
    assert!(hash_password("", SEED_HASH_COST).is_ok());
}

#[test]
fn test_verify_password_correct() {
    let hash = hash_password("P@$$W0rd", SEED_HASH_COST).unwrap();
    assert!(verify_password("P@$$W0rd", &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("P@$$W0rd", SEED_HASH_COST).unwrap();
    assert!(!verify_password("Password", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    assert!(verify_password("Hunter2", "not-a-bcrypt-hash").is_err());
}

#[test]
fn test_hash_password_salted() {
    let first = hash_password("Adm1n", SEED_HASH_COST).unwrap();
    let second = hash_password("Adm1n", SEED_HASH_COST).unwrap();
    assert_ne!(first, second);
}
