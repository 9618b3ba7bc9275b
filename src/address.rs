use rand::Rng;

use crate::vendors::VENDORS;

/// Fraction by which each cycle's wait deviates from the base interval.
pub const CYCLE_VARIANCE: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAddress {
    pub vendor: &'static str,
    pub address: String,
}

pub fn choose_vendor<R: Rng>(rng: &mut R) -> (&'static str, &'static str) {
    VENDORS[rng.gen_range(0..VENDORS.len())]
}

/// Builds a candidate address: a vendor prefix followed by three sections of
/// two digits, each digit uniform in 1..=9. The result is an address-shaped
/// string, not a validated IEEE 802 MAC.
pub fn generate_address<R: Rng>(rng: &mut R) -> GeneratedAddress {
    let (vendor, prefix) = choose_vendor(rng);
    let mut address = String::from(prefix);
    for _ in 0..3 {
        address.push(':');
        address.push_str(&section(rng));
    }
    GeneratedAddress { vendor, address }
}

fn section<R: Rng>(rng: &mut R) -> String {
    format!("{}{}", rng.gen_range(1..=9), rng.gen_range(1..=9))
}

/// Returns `seconds` shifted by a uniform-random delta of at most
/// ±`variance`/2, i.e. [0.875×s, 1.125×s] for the default variance.
pub fn variate<R: Rng>(rng: &mut R, seconds: u64, variance: f64) -> f64 {
    let delta = (rng.gen::<f64>() - 0.5) * variance;
    seconds as f64 + (seconds as f64 * delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn addresses_have_vendor_prefix_and_digit_sections() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let generated = generate_address(&mut rng);
            let sections: Vec<&str> = generated.address.split(':').collect();
            assert_eq!(sections.len(), 6, "bad shape: {}", generated.address);

            let prefix = sections[..3].join(":");
            assert!(
                VENDORS.iter().any(|(v, p)| *v == generated.vendor && *p == prefix),
                "unknown prefix {prefix} for vendor {}",
                generated.vendor
            );

            for section in &sections[3..] {
                assert_eq!(section.len(), 2, "bad section in {}", generated.address);
                assert!(section.chars().all(|c| ('1'..='9').contains(&c)));
            }
        }
    }

    #[test]
    fn every_vendor_gets_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5_000 {
            seen.insert(choose_vendor(&mut rng).0);
        }
        assert_eq!(seen.len(), VENDORS.len());
    }

    #[test]
    fn variate_stays_within_bounds_and_spreads() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for _ in 0..10_000 {
            let value = variate(&mut rng, 1800, CYCLE_VARIANCE);
            assert!((1575.0..=2025.0).contains(&value), "out of range: {value}");
            min = min.min(value);
            max = max.max(value);
        }
        // A degenerate generator would collapse these.
        assert!(max - min > 1.0);
    }
}
