//! 赛果评分引擎
//!
//! 识别文本 → 逐行解析（parser）→ 跨图片身份归并（reconcile）
//! → 成绩表装配（table）。名次换算和名称归一化是底层纯函数。

pub mod name;
pub mod parser;
pub mod rank;
pub mod reconcile;
pub mod table;

pub use name::normalize_name;
pub use parser::{parse_line, parse_transcript, ParsedEntry};
pub use rank::{score_for_rank, DNF_SCORE, VALID_SCORES};
pub use reconcile::DriverBoard;
pub use table::{assemble, ScoreRow, ScoreTable};

use crate::recognizer::RecognitionOutcome;

/// 把一批识别结果装配成最终成绩表
///
/// 图片按提交顺序解析并归并，识别失败的图片不产生行列。
/// 整批没有任何成绩时返回示例成绩表。
pub fn build_score_table(outcomes: &[RecognitionOutcome]) -> ScoreTable {
    let image_order: Vec<String> = outcomes.iter().map(|o| o.file_name.clone()).collect();

    let mut board = DriverBoard::new();
    for outcome in outcomes {
        if !outcome.is_ok() {
            continue;
        }
        let entries = parse_transcript(&outcome.transcript);
        board.record_image(&outcome.file_name, &entries);
    }

    assemble(&board, &image_order)
}
