//! Digit scrambling.
//!
//! Every non-zero digit is swapped for a random digit from the same half of
//! the decimal range, so the rough size of each position survives while the
//! exact value does not.

use rand::Rng;

/// Replacement range for digits `1` to `4`. Zero is a valid draw.
const LOW_BUCKET: std::ops::RangeInclusive<u32> = 0..=4;

/// Replacement range for digits `5` to `9`.
const HIGH_BUCKET: std::ops::RangeInclusive<u32> = 5..=9;

/// Scramble the ASCII digits of `text`.
///
/// `0` is never changed and every character that is not a digit (sign,
/// decimal point, letters, separators) is copied as is. Each position is
/// drawn independently from `rng`.
pub fn scramble_digits<R: Rng>(text: &str, rng: &mut R) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) if c.is_ascii_digit() => scramble_digit(digit, rng),
            _ => c,
        })
        .collect()
}

fn scramble_digit<R: Rng>(digit: u32, rng: &mut R) -> char {
    let replacement = match digit {
        0 => 0,
        1..=4 => rng.random_range(LOW_BUCKET),
        _ => rng.random_range(HIGH_BUCKET),
    };

    // replacement is always a single decimal digit
    char::from_digit(replacement, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bucket(c: char) -> u8 {
        match c {
            '0' => 0,
            '1'..='4' => 1,
            _ => 2,
        }
    }

    #[test]
    fn test_zeros_and_buckets_preserved() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = "0102030405060708090";

        for _ in 0..200 {
            let output = scramble_digits(input, &mut rng);
            assert_eq!(output.len(), input.len());

            for (before, after) in input.chars().zip(output.chars()) {
                assert!(after.is_ascii_digit());
                if before == '0' {
                    assert_eq!(after, '0');
                } else if bucket(before) == 1 {
                    // low digits may land on zero
                    assert!(('0'..='4').contains(&after));
                } else {
                    assert_eq!(bucket(after), 2);
                }
            }
        }
    }

    #[test]
    fn test_non_digits_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble_digits("N/A", &mut rng), "N/A");
        assert_eq!(scramble_digits("not a number", &mut rng), "not a number");
        assert_eq!(scramble_digits("", &mut rng), "");
    }

    #[test]
    fn test_structure_preserved() {
        let mut rng = StdRng::seed_from_u64(3);
        let output = scramble_digits("-617.25e+16", &mut rng);
        let shape: String = output
            .chars()
            .map(|c| if c.is_ascii_digit() { '#' } else { c })
            .collect();
        assert_eq!(shape, "-###.##e+##");
    }

    #[test]
    fn test_non_ascii_digits_untouched() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(scramble_digits("٣٤٥", &mut rng), "٣٤٥");
    }

    #[test]
    fn test_positions_drawn_independently() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = "9".repeat(64);
        let output = scramble_digits(&input, &mut rng);
        let distinct: std::collections::HashSet<char> = output.chars().collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        assert_eq!(
            scramble_digits("123456789", &mut first),
            scramble_digits("123456789", &mut second)
        );
    }
}
