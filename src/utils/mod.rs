pub mod url_normalizer;

pub use url_normalizer::{UrlNormalizeError, normalize, validate_target};

/// 短码字母表（URL 安全，64 个字符）
pub const CODE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(length)
        .collect()
}
