use crate::entities::MaxCirclesResult;

const COUNT_WEIGHT: i64 = 10;
const PERFECT_BALANCE_BONUS: i64 = 1000;
const NEAR_BALANCE_BONUS: i64 = 500;
const FAIR_BALANCE_BONUS: i64 = 200;
/// Minimum total count for the near and fair balance bonuses to apply
const BALANCE_BONUS_MIN_COUNT: usize = 12;
const ALL_TYPES_PRESENT_BONUS: i64 = 100;

/// Scores a result, higher is better.
///
/// Every placed circle is worth a little, an even distribution over the circle types a lot:
/// a result where every type is placed equally often beats one with a few more circles that
/// neglects a type.
pub fn evaluate_result(result: &MaxCirclesResult) -> i64 {
    if result.total_count == 0 {
        return 0;
    }
    let total = result.total_count;
    let gap = result.balance_gap();

    let mut score = total as i64 * COUNT_WEIGHT;
    score += match gap {
        0 => PERFECT_BALANCE_BONUS,
        1 if total >= BALANCE_BONUS_MIN_COUNT => NEAR_BALANCE_BONUS,
        2 if total >= BALANCE_BONUS_MIN_COUNT => FAIR_BALANCE_BONUS,
        _ => 0,
    };

    let gap = gap as i64;
    let penalty_weight = if gap >= 3 { 5 } else { 2 };
    score -= gap * gap * penalty_weight;

    if result.circles_by_type.iter().all(|t| t.count > 0) {
        score += ALL_TYPES_PRESENT_BONUS;
    }
    score
}
