use educapost_core::{hash_password, hash_password_with_cost, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "senha-forte-123";
    let hash = hash_password(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_verify_password_correct() {
    let hash = hash_password_with_cost("correctpassword", 4).unwrap();
    assert!(verify_password("correctpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password_with_cost("correctpassword", 4).unwrap();
    assert!(!verify_password("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");
    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "samepassword";
    let hash1 = hash_password_with_cost(password, 4).unwrap();
    let hash2 = hash_password_with_cost(password, 4).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_hash_unicode_password() {
    let password = "açaí-coração-ñ";
    let hash = hash_password_with_cost(password, 4).unwrap();
    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("acai-coracao-n", &hash).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let hash = hash_password_with_cost("Password123", 4).unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
    assert!(!verify_password("PASSWORD123", &hash).unwrap());
}
