//! 成绩表装配
//!
//! 把归并台账整理成矩形成绩表：
//! - 列 = 至少录得一条积分的图片，按提交顺序排列
//! - 行 = 全部车手，按名称码点顺序排列
//! - 缺格填未完赛积分 -5
//! - 没有任何可用成绩时给出示例成绩表，而不是空表

use std::collections::HashSet;

use rand::Rng;

use super::rank::{DNF_SCORE, VALID_SCORES};
use super::reconcile::DriverBoard;

/// 示例成绩表使用的车手名
const PLACEHOLDER_DRIVERS: [&str; 4] = ["张三", "李四", "王五", "赵六"];

/// 没有任何图片时示例成绩表使用的列名
const PLACEHOLDER_IMAGES: [&str; 2] = ["示例图片1", "示例图片2"];

/// 一行成绩：车手名 + 按列顺序排列的积分
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub driver: String,
    pub scores: Vec<i32>,
}

/// 矩形成绩表
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    /// 列标题（图片名）
    pub columns: Vec<String>,
    /// 行（车手），每行积分数与列数一致
    pub rows: Vec<ScoreRow>,
    /// 是否为示例数据
    pub placeholder: bool,
}

/// 装配成绩表
///
/// `image_order` 为全部已提交图片的名称，按提交顺序排列，
/// 识别失败的图片也包含在内（它们不会成为列）。
pub fn assemble(board: &DriverBoard, image_order: &[String]) -> ScoreTable {
    let mut seen = HashSet::new();
    let columns: Vec<String> = image_order
        .iter()
        .filter(|id| {
            seen.insert(id.as_str())
                && board.drivers().iter().any(|d| d.scores.contains_key(*id))
        })
        .cloned()
        .collect();

    let mut rows: Vec<ScoreRow> = board
        .drivers()
        .iter()
        .map(|d| ScoreRow {
            driver: d.name.clone(),
            scores: columns
                .iter()
                .map(|col| d.scores.get(col).copied().unwrap_or(DNF_SCORE))
                .collect(),
        })
        .collect();
    rows.sort_by(|a, b| a.driver.cmp(&b.driver));

    if rows.is_empty() || columns.is_empty() {
        return placeholder_table(image_order);
    }

    ScoreTable {
        columns,
        rows,
        placeholder: false,
    }
}

/// 生成示例成绩表：固定4名车手 × 实际提交的图片名（一张都没有时用示例列名），
/// 格子填随机的合法积分
fn placeholder_table(image_order: &[String]) -> ScoreTable {
    let columns: Vec<String> = if image_order.is_empty() {
        PLACEHOLDER_IMAGES.iter().map(|s| s.to_string()).collect()
    } else {
        image_order.to_vec()
    };

    let mut rng = rand::thread_rng();
    let rows = PLACEHOLDER_DRIVERS
        .iter()
        .map(|driver| ScoreRow {
            driver: driver.to_string(),
            scores: (0..columns.len())
                .map(|_| VALID_SCORES[rng.gen_range(0..VALID_SCORES.len())])
                .collect(),
        })
        .collect();

    ScoreTable {
        columns,
        rows,
        placeholder: true,
    }
}
