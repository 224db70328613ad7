use sha2::{Digest, Sha256};

#[must_use]
pub fn sha256_hex(input: &[u8]) -> String {
    format!("{:x}", Sha256::digest(input))
}

#[cfg(test)]
mod tests {
    use super::sha256_hex;

    #[test]
    fn hash_is_stable_for_same_input() {
        let value = b"chatlens-stable";
        assert_eq!(sha256_hex(value), sha256_hex(value));
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        assert_ne!(sha256_hex(b"alpha"), sha256_hex(b"beta"));
    }

    #[test]
    fn hash_is_lowercase_hex_of_fixed_width() {
        let digest = sha256_hex(b"");
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
