//! Property-based tests for the weighted distance.
//!
//! The weighted distance is a ranking score rather than a metric, so the
//! triangle inequality is deliberately not checked. What must hold:
//!
//! 1. **Identity**: d(x, x) = 0
//! 2. **Indiscernibles**: d(x, y) = 0 implies x = y
//! 3. **Symmetry**: d(x, y) = d(y, x)
//! 4. **Empty string**: d("", s) = d(s, "") = |s|
//! 5. **Length bound**: d(x, y) >= ||x| - |y||
//! 6. **Discounts only lower costs**: d(x, y) <= unweighted OSA distance

use proptest::prelude::*;
use spellcheckrs::weighted_distance;

// Small alphabet rich in the discounted pairs so they actually get exercised.
fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[AEIOUTHRNB]{0,10}").unwrap()
}

/// Plain optimal string alignment distance with unit costs.
fn unit_osa(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                dp[i][j] = dp[i][j].min(dp[i - 2][j - 2] + 1);
            }
        }
    }
    dp[a.len()][b.len()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn weighted_distance_identity(a in arb_word()) {
        prop_assert_eq!(weighted_distance(&a, &a), 0.0);
    }

    #[test]
    fn weighted_distance_indiscernible(a in arb_word(), b in arb_word()) {
        if weighted_distance(&a, &b) == 0.0 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn weighted_distance_symmetric(a in arb_word(), b in arb_word()) {
        let d_ab = weighted_distance(&a, &b);
        let d_ba = weighted_distance(&b, &a);
        prop_assert_eq!(d_ab, d_ba, "asymmetry for {:?} / {:?}", a, b);
    }

    #[test]
    fn weighted_distance_empty(s in arb_word()) {
        let len = s.chars().count() as f64;
        prop_assert_eq!(weighted_distance("", &s), len);
        prop_assert_eq!(weighted_distance(&s, ""), len);
    }

    #[test]
    fn weighted_distance_length_bound(a in arb_word(), b in arb_word()) {
        let delta = a.chars().count().abs_diff(b.chars().count()) as f64;
        prop_assert!(weighted_distance(&a, &b) >= delta);
    }

    #[test]
    fn weighted_distance_at_most_unit_osa(a in arb_word(), b in arb_word()) {
        let weighted = weighted_distance(&a, &b);
        let unit = unit_osa(&a, &b) as f64;
        prop_assert!(weighted <= unit);
        prop_assert!(weighted >= unit / 2.0);
    }
}
