//! Public project slug generation.
//!
//! Format: six random lowercase-alphanumeric characters, a hyphen, then
//! the current Unix-millis timestamp in base-36. The random prefix keeps
//! slugs unguessable enough for link sharing; the timestamp suffix makes
//! collisions practically impossible without a uniqueness round-trip.

use rand::Rng;

const SLUG_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 6;

/// Generate a fresh project slug, e.g. `k7wink-mhse0y68`.
pub fn generate_project_slug() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    generate_with_timestamp(millis)
}

fn generate_with_timestamp(millis: i64) -> String {
    let mut rng = rand::rng();
    let prefix: String = (0..RANDOM_LEN)
        .map(|_| SLUG_CHARS[rng.random_range(0..SLUG_CHARS.len())] as char)
        .collect();
    format!("{prefix}-{}", to_base36(millis))
}

fn to_base36(mut n: i64) -> String {
    if n <= 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base36 digits are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_has_expected_shape() {
        let slug = generate_project_slug();
        let (prefix, suffix) = slug.split_once('-').expect("slug contains a hyphen");
        assert_eq!(prefix.len(), RANDOM_LEN);
        assert!(prefix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn base36_round_trip() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(9), "9");
        assert_eq!(to_base36(10), "a");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn base36_uses_digits_first_alphabet() {
        // Matches the conventional 0-9a-z encoding of a millis timestamp.
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn same_timestamp_differs_in_prefix() {
        // The random prefix is the only variation for a fixed timestamp;
        // 36^6 combinations make a repeat across two draws vanishingly rare.
        let a = generate_with_timestamp(1_700_000_000_000);
        let b = generate_with_timestamp(1_700_000_000_000);
        assert_eq!(a.split_once('-').unwrap().1, b.split_once('-').unwrap().1);
        assert_ne!(a, b);
    }
}
