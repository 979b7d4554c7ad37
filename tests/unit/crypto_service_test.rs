//! Unit tests for password hashing: salts, derivation, and verification.

use skillswap::services::crypto_service::{CryptoService, CryptoServiceTrait};

#[test]
fn test_generate_salt_length_and_uniqueness() {
    let crypto = CryptoService::new();
    let a = crypto.generate_salt().unwrap();
    let b = crypto.generate_salt().unwrap();

    assert_eq!(a.len(), 16);
    assert_eq!(b.len(), 16);
    assert_ne!(a, b);
}

#[test]
fn test_hash_is_deterministic_for_same_salt() {
    let crypto = CryptoService::new();
    let salt = crypto.generate_salt().unwrap();

    let h1 = crypto.hash_password("Passw0rd", &salt).unwrap();
    let h2 = crypto.hash_password("Passw0rd", &salt).unwrap();
    assert_eq!(h1, h2);
    assert_eq!(h1.len(), 32);
}

#[test]
fn test_different_salts_produce_different_hashes() {
    let crypto = CryptoService::new();
    let salt_a = crypto.generate_salt().unwrap();
    let salt_b = crypto.generate_salt().unwrap();

    let h1 = crypto.hash_password("Passw0rd", &salt_a).unwrap();
    let h2 = crypto.hash_password("Passw0rd", &salt_b).unwrap();
    assert_ne!(h1, h2);
}

#[test]
fn test_verify_accepts_correct_password() {
    let crypto = CryptoService::new();
    let salt = crypto.generate_salt().unwrap();
    let hash = crypto.hash_password("Passw0rd", &salt).unwrap();

    assert!(crypto.verify_password("Passw0rd", &salt, &hash));
}

#[test]
fn test_verify_rejects_wrong_password() {
    let crypto = CryptoService::new();
    let salt = crypto.generate_salt().unwrap();
    let hash = crypto.hash_password("Passw0rd", &salt).unwrap();

    assert!(!crypto.verify_password("passw0rd", &salt, &hash));
    assert!(!crypto.verify_password("", &salt, &hash));
}

#[test]
fn test_zeroize_memory_clears_buffer() {
    let crypto = CryptoService::new();
    let mut data = vec![0xAAu8; 32];
    crypto.zeroize_memory(&mut data);
    assert!(data.iter().all(|&b| b == 0));
}
