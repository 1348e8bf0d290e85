//! # Armstrong Numbers
//!
//! An Armstrong number equals the sum of its decimal digits, each raised to
//! the power of the digit count: 153 = 1^3 + 5^3 + 3^3.
//!
//! ## Exactness
//!
//! Power sums are accumulated in `u128`. The widest `i64` has 19 digits and
//! its worst-case sum is 18 * 9^19 + 8^19, past `u64::MAX`, so a 64-bit
//! accumulator would wrap. `u128` keeps every representable input exact.
//!
//! ## Purity
//!
//! Nothing in here touches I/O or shared state. Every input maps to a
//! defined output: negatives check as `false`, inverted ranges come back
//! empty.

use serde::Serialize;

/// Decimal digits of `number`, most significant first. `0` yields `[0]`.
pub fn digits(number: u64) -> Vec<u8> {
    number.to_string().bytes().map(|b| b - b'0').collect()
}

fn sum_of_powers(digits: &[u8]) -> u128 {
    let exponent = digits.len() as u32;
    digits.iter().map(|&d| (d as u128).pow(exponent)).sum()
}

/// Whether `number` equals the sum of its digits raised to the digit count.
/// Negative numbers are never Armstrong numbers.
pub fn is_armstrong(number: i64) -> bool {
    if number < 0 {
        return false;
    }

    sum_of_powers(&digits(number as u64)) == number as u128
}

/// All Armstrong numbers in `[min, max]`, ascending. A negative `min` is
/// clamped to zero; an inverted range yields nothing. No internal cap on
/// range width, bounding it is the caller's policy.
pub fn find_in_range(min: i64, max: i64) -> Vec<i64> {
    let min = min.max(0);
    if max < min {
        return Vec::new();
    }

    (min..=max).filter(|&n| is_armstrong(n)).collect()
}

/// One worked-out check, shaped for display. Optional fields are skipped
/// when serialized so an out-of-domain result carries only the remark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub is_armstrong: bool,
    pub number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_digits: Option<usize>,
    /// The derivation, like `"1^3 + 5^3 + 3^3 = 153"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_of_powers: Option<u128>,
    /// Set only for out-of-domain input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Like [`is_armstrong`], but also returns the per-digit derivation.
/// Negative input gets a remark instead of a calculation.
pub fn evaluate_with_detail(number: i64) -> (bool, Evaluation) {
    if number < 0 {
        return (
            false,
            Evaluation {
                is_armstrong: false,
                number,
                digits: None,
                num_digits: None,
                calculation: None,
                sum_of_powers: None,
                remark: Some("Negative numbers cannot be Armstrong numbers".to_string()),
            },
        );
    }

    let digits = digits(number as u64);
    let num_digits = digits.len();
    let sum = sum_of_powers(&digits);
    let is_armstrong = sum == number as u128;

    let terms: Vec<String> = digits.iter().map(|d| format!("{d}^{num_digits}")).collect();
    let calculation = format!("{} = {}", terms.join(" + "), sum);

    (
        is_armstrong,
        Evaluation {
            is_armstrong,
            number,
            digits: Some(digits),
            num_digits: Some(num_digits),
            calculation: Some(calculation),
            sum_of_powers: Some(sum),
            remark: None,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits() {
        for n in 0..=9 {
            assert!(is_armstrong(n), "{n} should be an Armstrong number");
        }
    }

    #[test]
    fn test_known_numbers() {
        assert!(is_armstrong(153));
        assert!(!is_armstrong(154));
        assert!(is_armstrong(9474));
        assert!(!is_armstrong(10));
    }

    #[test]
    fn test_negative() {
        assert!(!is_armstrong(-1));
        assert!(!is_armstrong(-153));
    }

    #[test]
    fn test_digit_order() {
        assert_eq!(digits(0), vec![0]);
        assert_eq!(digits(907), vec![9, 0, 7]);
        assert_eq!(digits(100), vec![1, 0, 0]);
    }

    #[test]
    fn test_three_digit_range() {
        assert_eq!(find_in_range(100, 999), vec![153, 370, 371, 407]);
    }

    #[test]
    fn test_inverted_range() {
        assert_eq!(find_in_range(500, 100), Vec::<i64>::new());
    }

    #[test]
    fn test_negative_min_clamps() {
        assert_eq!(find_in_range(-50, 5), find_in_range(0, 5));
        assert_eq!(find_in_range(-50, 5), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_detail_agrees_with_plain_check() {
        for n in [0, 1, 9, 10, 153, 154, 370, 371, 407, 9474, 9475] {
            let (result, evaluation) = evaluate_with_detail(n);
            assert_eq!(result, is_armstrong(n));
            assert_eq!(evaluation.is_armstrong, result);
            assert_eq!(evaluation.number, n);
        }
    }

    #[test]
    fn test_detail_calculation_string() {
        let (result, evaluation) = evaluate_with_detail(153);
        assert!(result);
        assert_eq!(
            evaluation.calculation.as_deref(),
            Some("1^3 + 5^3 + 3^3 = 153")
        );
        assert_eq!(evaluation.digits, Some(vec![1, 5, 3]));
        assert_eq!(evaluation.num_digits, Some(3));
        assert_eq!(evaluation.sum_of_powers, Some(153));
        assert_eq!(evaluation.remark, None);
    }

    #[test]
    fn test_detail_negative_input() {
        let (result, evaluation) = evaluate_with_detail(-3);
        assert!(!result);
        assert!(!evaluation.is_armstrong);
        assert_eq!(evaluation.number, -3);
        assert!(evaluation.remark.is_some());
        assert!(evaluation.digits.is_none());
        assert!(evaluation.num_digits.is_none());
        assert!(evaluation.calculation.is_none());
        assert!(evaluation.sum_of_powers.is_none());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(evaluate_with_detail(9474), evaluate_with_detail(9474));
        assert_eq!(evaluate_with_detail(-7), evaluate_with_detail(-7));
    }

    #[test]
    fn test_wide_input_stays_exact() {
        // 19 digits: one 8 and eighteen 9s. The true sum is
        // 8^19 + 18 * 9^19 = 24459446106189713474, which overflows u64, so
        // a narrower accumulator would wrap and could answer wrongly.
        let (result, evaluation) = evaluate_with_detail(8_999_999_999_999_999_999);
        assert!(!result);
        assert_eq!(evaluation.sum_of_powers, Some(24_459_446_106_189_713_474));
        assert!(!is_armstrong(i64::MAX));
    }

    #[test]
    fn test_zero() {
        let (result, evaluation) = evaluate_with_detail(0);
        assert!(result);
        assert_eq!(evaluation.calculation.as_deref(), Some("0^1 = 0"));
    }
}
