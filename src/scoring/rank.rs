//! 名次→积分换算
//!
//! - 第1~8名对应固定积分表
//! - "X"/"x" 表示未完赛（DNF），计 -5 分
//! - 无法识别的名次记号一律按未完赛计分

/// 第1~8名的积分表（下标 = 名次 - 1）
const RANK_SCORES: [i32; 8] = [10, 7, 5, 4, 3, 1, 0, -1];

/// 未完赛（DNF）积分，同时也是成绩表缺格的填充值
pub const DNF_SCORE: i32 = -5;

/// 换算结果可能出现的全部积分值
pub const VALID_SCORES: [i32; 9] = [10, 7, 5, 4, 3, 1, 0, -1, -5];

/// 把名次记号换算成积分
///
/// 名次记号为 "1"~"8" 时查积分表，"X"/"x"（不区分大小写）记为未完赛。
/// 其余任何记号（超出范围的数字、非数字文本）同样按未完赛计分，
/// 该函数总是返回一个积分，不会报错。
pub fn score_for_rank(token: &str) -> i32 {
    let token = token.trim();
    if token.eq_ignore_ascii_case("x") {
        return DNF_SCORE;
    }
    match token.parse::<i64>() {
        Ok(rank) if (1..=8).contains(&rank) => RANK_SCORES[(rank - 1) as usize],
        _ => DNF_SCORE,
    }
}
