/// Vendor identifiers and the 3-octet prefix each one hands out.
pub const VENDORS: [(&str, &str); 5] = [
    ("intel", "00:1b:77"),
    ("hewlett_packard", "00:1b:78"),
    ("foxconn", "00:01:6c"),
    ("cisco", "00:10:29"),
    ("amd", "00:0c:87"),
];

/// Turns a table key into the name shown to the operator:
/// `hewlett_packard` becomes `Hewlett Packard`.
pub fn vendor_display_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    let mut capitalize = true;
    for c in key.chars() {
        if c == '_' {
            name.push(' ');
            capitalize = true;
        } else if capitalize {
            name.extend(c.to_uppercase());
            capitalize = false;
        } else {
            name.push(c);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalises_single_word() {
        assert_eq!(vendor_display_name("intel"), "Intel");
    }

    #[test]
    fn capitalises_after_underscores() {
        assert_eq!(vendor_display_name("hewlett_packard"), "Hewlett Packard");
    }

    #[test]
    fn empty_key_stays_empty() {
        assert_eq!(vendor_display_name(""), "");
    }

    #[test]
    fn every_vendor_has_a_display_name() {
        for (key, prefix) in VENDORS {
            let name = vendor_display_name(key);
            assert!(!name.is_empty());
            assert!(name.chars().next().unwrap().is_uppercase());
            assert_eq!(prefix.split(':').count(), 3);
        }
    }
}
