//! kart-ai-rust - 卡丁车赛果AI识别·成绩表生成工具
//!
//! 流程：扫描文件夹里的赛果图片 → 并发调用视觉识别接口取回文本
//! → 逐行解析出车手名次 → 跨图片归并同名车手 → 装配矩形成绩表
//! → 写出Excel文件。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod recognizer;
pub mod scanner;
pub mod scoring;
