// --- File: crates/roomly_auth/src/password.rs ---
//! Salted password digests.
//!
//! Stored form is `<salt>$<hex(HMAC-SHA256(key = salt, msg = password))>`.
//! Verification recomputes with the stored salt and compares the MAC,
//! so equal passwords never produce equal stored strings.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

const SEPARATOR: char = '$';

/// Digest a plaintext password with a fresh random salt.
pub fn digest(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let mac = mac_hex(&salt, password);
    format!("{salt}{SEPARATOR}{mac}")
}

/// Check a plaintext password against a stored digest. A malformed stored
/// value verifies as false rather than erroring.
pub fn verify(password: &str, stored: &str) -> bool {
    let Some((salt, expected_hex)) = stored.split_once(SEPARATOR) else {
        return false;
    };
    let Ok(expected) = hex::decode(expected_hex) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(salt.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(password.as_bytes());
    mac.verify_slice(&expected).is_ok()
}

fn mac_hex(salt: &str, password: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(salt.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(password.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
