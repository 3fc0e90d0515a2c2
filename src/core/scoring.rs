//! Scoring module - line clear rewards
//!
//! Multi-line clears pay super-linearly: each extra simultaneous line
//! doubles the reward and adds another 100.

/// Score awarded for clearing `lines` rows at once
///
/// `score_for(n) = 2^n * 100 - 100` for n > 0:
/// 1 line -> 100, 2 -> 300, 3 -> 700, 4 -> 1500.
pub fn score_for(lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    (1u32 << lines) * 100 - 100
}
