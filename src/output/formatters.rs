//! Formatting utilities for terminal output

/// Show a scrambled word as spaced capitals, e.g. `T L K O N I`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c.to_ascii_uppercase());
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Round progress bar, `round` of `max_rounds` filled
#[must_use]
pub fn round_bar(round: u32, max_rounds: u32, width: usize) -> String {
    create_progress_bar(f64::from(round), f64::from(max_rounds), width)
}

/// Verdict line for a final score out of the best possible
#[must_use]
pub fn score_verdict(score: u32, best: u32) -> &'static str {
    if best == 0 {
        return "Game over!";
    }
    match u64::from(score) * 100 / u64::from(best) {
        100 => "🏆 Perfect game!",
        75..=99 => "⭐ Excellent!",
        50..=74 => "👍 Well played!",
        1..=49 => "✨ Keep practicing!",
        _ => "😅 Better luck next time!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_letters_uppercases_and_spaces() {
        assert_eq!(spaced_letters("tlkoni"), "T L K O N I");
        assert_eq!(spaced_letters("ox"), "O X");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn round_bar_tracks_rounds() {
        assert_eq!(round_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(round_bar(10, 10, 4), "████");
    }

    #[test]
    fn score_verdicts() {
        assert_eq!(score_verdict(200, 200), "🏆 Perfect game!");
        assert_eq!(score_verdict(160, 200), "⭐ Excellent!");
        assert_eq!(score_verdict(100, 200), "👍 Well played!");
        assert_eq!(score_verdict(20, 200), "✨ Keep practicing!");
        assert_eq!(score_verdict(0, 200), "😅 Better luck next time!");
        assert_eq!(score_verdict(0, 0), "Game over!");
    }

    #[test]
    fn score_verdict_handles_huge_scores() {
        assert_eq!(score_verdict(u32::MAX, u32::MAX), "🏆 Perfect game!");
        assert_eq!(score_verdict(u32::MAX / 4 * 3, u32::MAX), "👍 Well played!");
    }
}
