use std::cmp::Ordering;

/// Total order on object keys: lexicographic over UTF-16 code units.
///
/// RFC 8785 sorts keys by their UTF-16 encoding, each code unit compared as
/// an unsigned 16-bit integer. This is neither UTF-8 byte order nor Unicode
/// scalar order: a supplementary-plane character encodes as a surrogate pair
/// whose high surrogate (0xD800..=0xDBFF) sorts below BMP characters above
/// U+D7FF. `encode_utf16` yields exactly those code units, so comparing the
/// iterators needs no allocation.
pub(crate) fn cmp_keys(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use test_case::test_case;

    use super::cmp_keys;

    #[test_case("", "a", Ordering::Less; "empty before non-empty")]
    #[test_case("a", "a", Ordering::Equal; "equal")]
    #[test_case("a", "ab", Ordering::Less; "prefix sorts first")]
    #[test_case("1", "10", Ordering::Less; "string comparison not numeric")]
    #[test_case("10", "2", Ordering::Less; "digit strings compare as text")]
    #[test_case("\u{1F600}", "\u{FB33}", Ordering::Less; "surrogate pair before high BMP")]
    #[test_case("\u{FB33}", "\u{10000}", Ordering::Greater; "supplementary plane uses surrogates")]
    #[test_case("\r", "1", Ordering::Less; "control before digit")]
    fn utf16_code_unit_order(a: &str, b: &str, expected: Ordering) {
        assert_eq!(cmp_keys(a, b), expected);
        assert_eq!(cmp_keys(b, a), expected.reverse());
    }

    #[test]
    fn matches_allocating_comparison() {
        let keys = ["€", "\r", "\u{FB33}", "1", "\u{1F600}", "\u{80}", "ö"];
        for a in keys {
            for b in keys {
                let expanded: Vec<u16> = a.encode_utf16().collect();
                let other: Vec<u16> = b.encode_utf16().collect();
                assert_eq!(cmp_keys(a, b), expanded.cmp(&other), "{a:?} vs {b:?}");
            }
        }
    }
}
