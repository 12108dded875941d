pub mod excel;

use crate::error::Result;
use crate::scoring::ScoreTable;
use chrono::Local;
use std::path::{Path, PathBuf};

/// 默认输出文件名：成绩表_YYYYMMDD_HHMMSS.xlsx
fn default_file_name() -> String {
    format!("成绩表_{}.xlsx", Local::now().format("%Y%m%d_%H%M%S"))
}

/// 输出参数是目录或没有扩展名时，补上带时间戳的默认文件名
fn resolve_output_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(default_file_name())
    } else {
        output.to_path_buf()
    }
}

/// 把成绩表写成Excel文件，返回实际写入的路径
pub fn export_score_table(table: &ScoreTable, output: &Path) -> Result<PathBuf> {
    let output_path = resolve_output_path(output);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    excel::write_score_table(table, &output_path)?;
    Ok(output_path)
}
