//! Scoring module - line clear rewards, drop points, leveling and gravity
//!
//! Line clears pay `LINE_SCORES[lines] * level` (100/300/500/800 per level). Hard drops
//! pay 2 points per row, scoring soft drops 1 point per row. The level is
//! `1 + lines / 10` and gravity speeds up by 15% per level down to an 80 ms floor.

use crate::types::{
    BASE_GRAVITY_MS, GRAVITY_DECAY, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES,
    MIN_GRAVITY_MS, SOFT_DROP_POINTS_PER_ROW,
};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Calculate drop score
pub fn calculate_drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows * HARD_DROP_POINTS_PER_ROW
    } else {
        rows * SOFT_DROP_POINTS_PER_ROW
    }
}

/// Level reached after clearing `lines` lines in total
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Gravity interval (ms per row) for a level: `max(80, floor(1000 * 0.85^(level-1)))`
pub fn gravity_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    let interval = (BASE_GRAVITY_MS as f64 * GRAVITY_DECAY.powi(steps)).floor() as u32;
    interval.max(MIN_GRAVITY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);
        assert_eq!(calculate_line_score(4, 3), 2400);
        assert_eq!(calculate_line_score(5, 1), 0);
    }

    #[test]
    fn test_drop_score() {
        assert_eq!(calculate_drop_score(10, true), 20);
        assert_eq!(calculate_drop_score(10, false), 10);
        assert_eq!(calculate_drop_score(0, true), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(39), 4);
    }

    #[test]
    fn test_gravity_curve() {
        assert_eq!(gravity_interval_ms(1), 1000);
        assert_eq!(gravity_interval_ms(2), 850);
        assert_eq!(gravity_interval_ms(0), 1000);
        assert_eq!(gravity_interval_ms(50), 80);
        assert_eq!(gravity_interval_ms(u32::MAX), 80);

        let mut previous = gravity_interval_ms(1);
        for level in 2..40 {
            let interval = gravity_interval_ms(level);
            assert!(interval <= previous);
            assert!(interval >= 80);
            previous = interval;
        }
    }
}
