//! Input arrays: validation, parsing and random generation
//!
//! Every run validates its input with [`validate`] before any work is done.
//! The parsing helpers filter out tokens that are not numbers (the way a
//! typed-in list tolerates stray punctuation) but reject any number that is
//! not an integer in the accepted range instead of silently dropping it.

use super::constants::{MAX_LEN, MAX_VALUE, MIN_GENERATED_LEN, MIN_VALUE};
use super::errors::SortError;
use crate::trace::Element;
use rand::Rng;
use serde_json::Value as JsonValue;
use std::fmt;

/// Check length and value range of an array
pub fn validate(values: &[Element]) -> Result<(), SortError> {
    if values.is_empty() {
        return Err(SortError::malformed("array is empty"));
    }
    if values.len() > MAX_LEN {
        return Err(SortError::malformed(format!(
            "array has {} elements, the limit is {}",
            values.len(),
            MAX_LEN
        )));
    }
    if let Some((index, value)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| !(MIN_VALUE..=MAX_VALUE).contains(*v))
    {
        return Err(out_of_range(index, i64::from(*value)));
    }
    Ok(())
}

/// Parse a comma or whitespace separated list such as `"5, 3, 8, 1"`
pub fn parse_array(text: &str) -> Result<Vec<Element>, SortError> {
    let mut values = Vec::new();
    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        // Non-numeric tokens are filtered out
        if !is_number_token(token) {
            continue;
        }
        let n = token
            .parse::<i64>()
            .map_err(|_| out_of_range(values.len(), token))?;
        values.push(checked_element(values.len(), n)?);
    }
    validate(&values)?;
    Ok(values)
}

/// Optional sign, then digits with at most one decimal point
fn is_number_token(token: &str) -> bool {
    let body = token.strip_prefix(['+', '-']).unwrap_or(token);
    let mut digits = 0;
    let mut points = 0;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Extract an array from a request body field
///
/// Anything other than a JSON array is rejected. Array items that are not
/// numbers are filtered out; numbers that are not in-range integers
/// (floats, huge values) are rejected.
pub fn from_json(value: &JsonValue) -> Result<Vec<Element>, SortError> {
    let items = value
        .as_array()
        .ok_or_else(|| SortError::malformed("expected an array of integers"))?;

    let mut values = Vec::with_capacity(items.len());
    for item in items {
        let JsonValue::Number(number) = item else {
            continue;
        };
        let n = number
            .as_i64()
            .ok_or_else(|| out_of_range(values.len(), number))?;
        values.push(checked_element(values.len(), n)?);
    }
    validate(&values)?;
    Ok(values)
}

/// Generate a random array
///
/// `size` is clamped to `MIN_GENERATED_LEN..=MAX_LEN` and the bounds to the
/// accepted value range (swapped if given in the wrong order).
pub fn generate_array<R: Rng>(
    rng: &mut R,
    size: usize,
    min: Element,
    max: Element,
) -> Vec<Element> {
    let size = size.clamp(MIN_GENERATED_LEN, MAX_LEN);
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let low = low.clamp(MIN_VALUE, MAX_VALUE);
    let high = high.clamp(MIN_VALUE, MAX_VALUE);

    (0..size).map(|_| rng.gen_range(low..=high)).collect()
}

fn checked_element(index: usize, n: i64) -> Result<Element, SortError> {
    Element::try_from(n)
        .ok()
        .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
        .ok_or_else(|| out_of_range(index, n))
}

fn out_of_range(index: usize, value: impl fmt::Display) -> SortError {
    SortError::malformed(format!(
        "value {} at index {} is not an integer in {}..={}",
        value, index, MIN_VALUE, MAX_VALUE
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_validate_bounds() {
        assert!(validate(&[1, 1000]).is_ok());
        assert!(validate(&[]).is_err());
        assert!(validate(&[0]).is_err());
        assert!(validate(&[1001]).is_err());
        assert!(validate(&vec![5; MAX_LEN]).is_ok());
        assert!(validate(&vec![5; MAX_LEN + 1]).is_err());
    }

    #[test]
    fn test_parse_array_filters_junk_tokens() {
        assert_eq!(parse_array("5, 3,8 1").unwrap(), vec![5, 3, 8, 1]);
        assert_eq!(parse_array("5, x, 3,, ?").unwrap(), vec![5, 3]);
    }

    #[test]
    fn test_parse_array_empty_after_filtering() {
        let err = parse_array("a, b, c").unwrap_err();
        assert_eq!(err, SortError::malformed("array is empty"));
    }

    #[test]
    fn test_parse_array_rejects_out_of_range() {
        assert!(parse_array("5, -3").is_err());
        assert!(parse_array("5, 1001").is_err());
    }

    #[test]
    fn test_parse_array_rejects_numbers_too_big_for_i64() {
        let err = parse_array("5, 99999999999999999999").unwrap_err();
        assert!(matches!(err, SortError::MalformedInput { .. }));
        assert!(err.to_string().contains("99999999999999999999"));
        assert!(parse_array("5, 2.5").is_err());
        assert!(parse_array("-99999999999999999999 3").is_err());
    }

    #[test]
    fn test_number_tokens() {
        assert!(is_number_token("42"));
        assert!(is_number_token("-7"));
        assert!(is_number_token("+3.5"));
        assert!(!is_number_token("x1"));
        assert!(!is_number_token("-"));
        assert!(!is_number_token("1.2.3"));
        assert!(!is_number_token("NaN"));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(from_json(&json!([5, 3, 8, 1])).unwrap(), vec![5, 3, 8, 1]);
        assert_eq!(from_json(&json!([5, "x", null, 2])).unwrap(), vec![5, 2]);
        assert!(from_json(&json!("5,3")).is_err());
        assert!(from_json(&json!({"a": 1})).is_err());
        assert!(from_json(&json!([])).is_err());
        assert!(from_json(&json!(["x"])).is_err());
        assert!(from_json(&json!([0])).is_err());
    }

    #[test]
    fn test_from_json_rejects_non_integer_numbers() {
        let err = from_json(&json!([5, 18446744073709551615u64])).unwrap_err();
        assert!(matches!(err, SortError::MalformedInput { .. }));
        assert!(from_json(&json!([5, 2.5])).is_err());
        assert!(from_json(&json!([5, -1])).is_err());
        // Non-numbers are still filtered
        assert_eq!(from_json(&json!([5, true, [1], 3])).unwrap(), vec![5, 3]);
    }

    #[test]
    fn test_generate_array_clamps() {
        let mut rng = StdRng::seed_from_u64(7);
        let small = generate_array(&mut rng, 1, 1, 100);
        assert_eq!(small.len(), MIN_GENERATED_LEN);

        let big = generate_array(&mut rng, 500, 2000, 990);
        assert_eq!(big.len(), MAX_LEN);
        assert!(big.iter().all(|v| (990..=1000).contains(v)));
    }

    #[test]
    fn test_generate_array_is_reproducible_with_seed() {
        let a = generate_array(&mut StdRng::seed_from_u64(42), 20, 1, 100);
        let b = generate_array(&mut StdRng::seed_from_u64(42), 20, 1, 100);
        assert_eq!(a, b);
    }
}
