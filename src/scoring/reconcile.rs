//! 跨图片车手身份归并
//!
//! 不同图片里同一车手的写法可能不同（空格、标点差异），
//! 以归一化键（见 `name` 模块）判定是否为同一人：
//! - 首次出现的写法成为该车手的显示名，之后不再改名
//! - 车手按首次出现顺序登记
//! - 每张图片的积分按图片名记录在车手名下

use std::collections::HashMap;

use super::name::normalize_name;
use super::parser::ParsedEntry;

/// 一名车手的归并记录
#[derive(Debug, Clone)]
pub struct DriverRecord {
    /// 显示名称，取首次出现的写法
    pub name: String,
    /// 归一化比较键
    key: String,
    /// 图片名→积分
    pub scores: HashMap<String, i32>,
}

/// 全部车手的归并台账
#[derive(Debug, Default)]
pub struct DriverBoard {
    drivers: Vec<DriverRecord>,
}

impl DriverBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 录入一张图片的解析结果
    ///
    /// 必须按图片提交顺序调用，首见写法的选取才可复现。
    /// 同一图片内两个写法归并到同一车手时，后写入者覆盖。
    pub fn record_image(&mut self, image_id: &str, entries: &[ParsedEntry]) {
        for entry in entries {
            let key = normalize_name(&entry.driver);
            let idx = match self.drivers.iter().position(|d| d.key == key) {
                Some(i) => i,
                None => {
                    self.drivers.push(DriverRecord {
                        name: entry.driver.clone(),
                        key,
                        scores: HashMap::new(),
                    });
                    self.drivers.len() - 1
                }
            };
            self.drivers[idx]
                .scores
                .insert(image_id.to_string(), entry.score);
        }
    }

    /// 已登记的车手，按首次出现顺序
    pub fn drivers(&self) -> &[DriverRecord] {
        &self.drivers
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
