//! Per-line orchestration of the obfuscation steps.

use rand::Rng;

use super::format::format_result;
use super::rescale::rescale;
use super::scramble::scramble_digits;

/// Run one line through rescale, scramble and format.
///
/// Blank lines come back as the empty string. Text that is not a number
/// skips rescaling and grouping; only its digits, if any, are scrambled.
pub fn process_line<R: Rng>(line: &str, rng: &mut R) -> String {
    let line = line.trim();
    if line.is_empty() {
        return line.to_string();
    }

    let scaled = rescale(line);
    let scrambled = scramble_digits(&scaled.to_string(), rng);
    format_result(&scrambled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_blank_line() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(process_line("", &mut rng), "");
        assert_eq!(process_line("   ", &mut rng), "");
    }

    #[test]
    fn test_text_passes_through() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(process_line("not a number", &mut rng), "not a number");
        assert_eq!(process_line("  N/A ", &mut rng), "N/A");
    }

    #[test]
    fn test_non_finite_passes_through() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(process_line("inf", &mut rng), "inf");
        assert_eq!(process_line("-inf", &mut rng), "-inf");
        assert_eq!(process_line("nan", &mut rng), "nan");
    }

    #[test]
    fn test_million_keeps_shape() {
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..100 {
            let output = process_line("1 000 000", &mut rng);
            if output == "0,00" {
                continue;
            }

            let chars: Vec<char> = output.chars().collect();
            assert_eq!(chars.len(), 10, "unexpected output {output}");
            assert!(('1'..='4').contains(&chars[0]));
            assert_eq!(&output[1..], "00 000,00");
        }
    }

    #[test]
    fn test_small_value_keeps_buckets() {
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..100 {
            // 500 stays below the first bracket and renders as "500.0"
            let output = process_line("500", &mut rng);
            let (int_part, frac_part) = output.split_once(',').expect("decimal comma");
            assert_eq!(frac_part, "00");
            assert_eq!(int_part.len(), 3);
            assert!(('5'..='9').contains(&int_part.chars().next().unwrap()));
            assert!(int_part.ends_with("00"));
        }
    }

    #[test]
    fn test_halved_value_keeps_fraction_digits() {
        let mut rng = StdRng::seed_from_u64(2);

        // 1234,5 / 2 = 617.25
        let output = process_line("1 234,5", &mut rng);
        let (int_part, frac_part) = output.split_once(',').expect("decimal comma");
        assert_eq!(int_part.len(), 3);
        assert_eq!(frac_part.len(), 2);
        let digits: Vec<char> = int_part.chars().chain(frac_part.chars()).collect();
        assert!(('5'..='9').contains(&digits[0]));
        assert!(('0'..='4').contains(&digits[1]));
        assert!(('5'..='9').contains(&digits[2]));
        assert!(('0'..='4').contains(&digits[3]));
        assert!(('5'..='9').contains(&digits[4]));
    }

    #[test]
    fn test_negative_million_not_rescaled() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let output = process_line("-2 000 000", &mut rng);
            assert!(output.starts_with('-'));
            assert!(output == "-0,00" || output.ends_with(" 000 000,00"), "{output}");
        }
    }
}
