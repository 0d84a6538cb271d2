//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Format guessed letters as `[a, e, o]`
#[must_use]
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    let joined: Vec<String> = letters.iter().map(char::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Describe how many slots a guess revealed
#[must_use]
pub fn hit_message(guess: char, hits: usize) -> String {
    match hits {
        0 => format!("Sorry, there are no {guess}'s"),
        1 => format!("Yes, there is one {guess}"),
        n => format!("Yes, there are {n} {guess}'s"),
    }
}

/// Create a bar showing the remaining budget out of `max`
#[must_use]
pub fn budget_bar(left: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((f64::from(left) / f64::from(max)) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_sorted_and_bracketed() {
        let letters: BTreeSet<char> = ['o', 'a', 'e'].into_iter().collect();
        assert_eq!(format_letters(&letters), "[a, e, o]");
        assert_eq!(format_letters(&BTreeSet::new()), "[]");
    }

    #[test]
    fn hit_messages() {
        assert_eq!(hit_message('o', 0), "Sorry, there are no o's");
        assert_eq!(hit_message('e', 1), "Yes, there is one e");
        assert_eq!(hit_message('e', 3), "Yes, there are 3 e's");
    }

    #[test]
    fn budget_bar_full() {
        assert_eq!(budget_bar(8, 8, 8), "████████");
    }

    #[test]
    fn budget_bar_half() {
        assert_eq!(budget_bar(4, 8, 10), "█████░░░░░");
    }

    #[test]
    fn budget_bar_empty() {
        assert_eq!(budget_bar(0, 8, 4), "░░░░");
        assert_eq!(budget_bar(0, 0, 4), "░░░░");
    }
}
