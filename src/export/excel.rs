//! 成绩表Excel生成
//!
//! 一张工作表：首行为表头（车手名称 + 各图片名），
//! 之后每行一名车手，积分写成数字单元格。

use crate::error::{KartAiError, Result};
use crate::scoring::ScoreTable;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "成绩表";
const DRIVER_HEADER: &str = "车手名称";

pub fn write_score_table(table: &ScoreTable, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let name_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let score_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| KartAiError::ExcelGeneration(format!("工作表命名错误: {}", e)))?;

    // 表头行
    worksheet
        .write_string_with_format(0, 0, DRIVER_HEADER, &header_format)
        .map_err(|e| KartAiError::ExcelGeneration(format!("表头写入错误: {}", e)))?;
    for (i, column) in table.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, (i + 1) as u16, column, &header_format)
            .map_err(|e| KartAiError::ExcelGeneration(format!("表头写入错误: {}", e)))?;
    }

    // 数据行：名称 + 各图片积分
    for (r, row) in table.rows.iter().enumerate() {
        let row_num = (r + 1) as u32;
        worksheet
            .write_string_with_format(row_num, 0, &row.driver, &name_format)
            .map_err(|e| KartAiError::ExcelGeneration(format!("名称写入错误: {}", e)))?;
        for (c, score) in row.scores.iter().enumerate() {
            worksheet
                .write_number_with_format(row_num, (c + 1) as u16, *score, &score_format)
                .map_err(|e| KartAiError::ExcelGeneration(format!("积分写入错误: {}", e)))?;
        }
    }

    // 列宽：名称列稍宽，积分列等宽
    worksheet
        .set_column_width(0, 18)
        .map_err(|e| KartAiError::ExcelGeneration(format!("列宽设置错误: {}", e)))?;
    for i in 0..table.columns.len() {
        worksheet
            .set_column_width((i + 1) as u16, 14)
            .map_err(|e| KartAiError::ExcelGeneration(format!("列宽设置错误: {}", e)))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| KartAiError::ExcelGeneration(format!("文件保存错误: {}", e)))?;

    Ok(())
}
