//! Text helpers for message lines.
//!
//! Input messages may be spaced arbitrarily; output is always regrouped into
//! fixed-size blocks separated by single spaces.

/// Default output block size.
pub const GROUP_SIZE: usize = 5;

/// Remove every whitespace character from `input`.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split `msg` into blocks of `size` symbols joined by single spaces.
/// The last block may be shorter.
pub fn group(msg: &str, size: usize) -> String {
    let size = size.max(1);
    let mut out = String::with_capacity(msg.len() + msg.len() / size);
    for (i, c) in msg.chars().enumerate() {
        if i > 0 && i % size == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_all_whitespace() {
        assert_eq!(strip_whitespace(" FROM his\tshoulder \n"), "FROMhisshoulder");
        assert_eq!(strip_whitespace("   "), "");
    }

    #[test]
    fn group_in_fives() {
        assert_eq!(group("QVPQSOKOILPUBKJZPISFXDW", GROUP_SIZE), "QVPQS OKOIL PUBKJ ZPISF XDW");
        assert_eq!(group("ABCDE", GROUP_SIZE), "ABCDE");
        assert_eq!(group("ABCDEF", GROUP_SIZE), "ABCDE F");
        assert_eq!(group("", GROUP_SIZE), "");
    }

    #[test]
    fn zero_group_size_is_treated_as_one() {
        assert_eq!(group("ABC", 0), "A B C");
    }
}
