//! Payment reference and outcome distribution tests

use chrono::NaiveDate;
use core_kernel::Timezone;
use domain_billing::reference::{REFERENCE_DIGITS, REFERENCE_PREFIX, REFERENCE_WIDTH};
use domain_billing::{
    generate_payment_reference, BillingError, PaymentReference, PaymentStatus,
    PremiumPaymentGenerator, ReferenceGenerator, StatusWeights, WeightedChoice,
};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use test_utils::DateFixtures;

fn is_reference_shape(value: &str) -> bool {
    let core = value.trim_end_matches(' ');
    let bytes = core.as_bytes();
    core.len() == 18
        && core.starts_with(REFERENCE_PREFIX)
        && bytes[3] == b'-'
        && bytes[12] == b'-'
        && bytes[4..12].iter().all(u8::is_ascii_digit)
        && bytes[13..18].iter().all(u8::is_ascii_digit)
}

// ============================================================================
// REFERENCE TESTS
// ============================================================================

mod reference_tests {
    use super::*;

    /// Verifies the reference embeds the given date
    #[test]
    fn test_reference_for_given_date() {
        let reference = generate_payment_reference(Some(DateFixtures::ymd(2024, 12, 25))).unwrap();

        assert!(is_reference_shape(reference.as_str()));
        assert_eq!(reference.date_segment(), "20241225");
        assert_eq!(reference.number_segment().len(), REFERENCE_DIGITS);
    }

    /// Verifies an omitted date resolves to today in the configured zone
    #[test]
    fn test_reference_defaults_to_today() {
        let timezone = Timezone::default();
        let before = timezone.today();
        let reference = generate_payment_reference(None).unwrap();
        let after = timezone.today();

        let date = reference.date().unwrap();
        assert!(date == before || date == after);
    }

    /// Verifies the default output is padded to the column width
    #[test]
    fn test_default_reference_is_padded() {
        let reference = generate_payment_reference(Some(DateFixtures::simulation_start())).unwrap();

        assert_eq!(reference.as_str().len(), REFERENCE_WIDTH);
        assert!(reference.is_fixed_width());
        assert_eq!(reference.as_str().trim_end().len(), 18);
    }

    /// Verifies padding can be switched off
    #[test]
    fn test_unpadded_reference() {
        let generator = ReferenceGenerator::new(false, Timezone::default());
        let mut rng = Pcg64Mcg::seed_from_u64(3);

        let reference = generator.generate(&mut rng, Some(DateFixtures::simulation_start())).unwrap();

        assert_eq!(reference.as_str().len(), 18);
        assert!(!reference.is_fixed_width());
        assert!(is_reference_shape(reference.as_str()));
    }

    /// Verifies parsing accepts both forms and rejects malformed input
    #[test]
    fn test_parse() {
        assert!(PaymentReference::parse("PMT-20240101-00042 ").is_ok());
        assert!(PaymentReference::parse("PMT-20240101-00042").is_ok());

        for bad in ["", "PMT-2024011-00042", "ABC-20240101-00042", "PMT-20240101-0004x", "PMT-20241301-00042"] {
            assert!(
                matches!(PaymentReference::parse(bad), Err(BillingError::InvalidReference(_))),
                "accepted {bad:?}"
            );
        }
    }

    /// Verifies the generator's references all use the simulation date
    #[test]
    fn test_generator_reference_method() {
        let mut generator = PremiumPaymentGenerator::seeded(9).unwrap();
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();

        for _ in 0..50 {
            let reference = generator.generate_payment_reference(Some(date)).unwrap();
            assert_eq!(reference.date(), Some(date));
        }
    }

    /// Verifies dates past year 9999 are refused instead of widening the reference
    #[test]
    fn test_five_digit_year_rejected() {
        let beyond = DateFixtures::ymd(10000, 1, 1);

        let result = generate_payment_reference(Some(beyond));

        assert!(matches!(result, Err(BillingError::UnsupportedDate(date)) if date == beyond));
    }

    /// Verifies every digit value turns up in the numeric segment
    #[test]
    fn test_digits_cover_full_range() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let generator = ReferenceGenerator::default();
        let mut seen = [false; 10];

        for _ in 0..200 {
            let reference = generator.generate(&mut rng, Some(DateFixtures::simulation_start())).unwrap();
            for b in reference.number_segment().bytes() {
                seen[(b - b'0') as usize] = true;
            }
        }

        assert!(seen.iter().all(|s| *s));
    }
}

// ============================================================================
// DISTRIBUTION TESTS
// ============================================================================

mod distribution_tests {
    use super::*;

    const DRAWS: usize = 100_000;

    /// Verifies the default outcome table converges to 95/3/2
    #[test]
    fn test_status_frequencies_converge() {
        let choice = StatusWeights::default().to_choice().unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(2024);
        let (mut successful, mut failed, mut pending) = (0usize, 0usize, 0usize);

        for _ in 0..DRAWS {
            match choice.sample(&mut rng) {
                PaymentStatus::Successful => successful += 1,
                PaymentStatus::Failed => failed += 1,
                PaymentStatus::Pending => pending += 1,
            }
        }

        let share = |n: usize| n as f64 / DRAWS as f64;
        assert!((share(successful) - 0.95).abs() < 0.005, "successful {}", share(successful));
        assert!((share(failed) - 0.03).abs() < 0.005, "failed {}", share(failed));
        assert!((share(pending) - 0.02).abs() < 0.005, "pending {}", share(pending));
    }

    /// Verifies probabilities are normalised weights
    #[test]
    fn test_probabilities_normalised() {
        let choice = WeightedChoice::new([("a", 3.0), ("b", 1.0)]).unwrap();

        assert_eq!(choice.probabilities(), vec![("a", 0.75), ("b", 0.25)]);
    }

    /// Verifies invalid tables are rejected
    #[test]
    fn test_invalid_tables() {
        let empty: Vec<(&str, f64)> = Vec::new();
        assert!(matches!(WeightedChoice::new(empty), Err(BillingError::InvalidWeights(_))));
        assert!(matches!(WeightedChoice::new([("a", -1.0)]), Err(BillingError::InvalidWeights(_))));
        assert!(matches!(WeightedChoice::new([("a", 0.0), ("b", 0.0)]), Err(BillingError::InvalidWeights(_))));
        assert!(matches!(WeightedChoice::new([("a", f64::NAN)]), Err(BillingError::InvalidWeights(_))));
    }

    /// Verifies a zero weight outcome is never drawn
    #[test]
    fn test_zero_weight_never_drawn() {
        let weights = StatusWeights { successful: 1.0, failed: 0.0, pending: 0.0 };
        let choice = weights.to_choice().unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(0);

        assert!((0..1_000).all(|_| choice.sample(&mut rng) == PaymentStatus::Successful));
    }
}
