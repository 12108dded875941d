//! 车手名称归一化
//!
//! 识别结果里同一车手的写法经常不一致（多余空格、标点、全角符号等），
//! 比较前先压缩成规范键：只保留汉字和ASCII字母数字，其余字符全部剔除。

/// 把显示名称压缩成比较用的规范键
///
/// 保留的字符：CJK统一汉字（U+4E00~U+9FFF）、ASCII字母、ASCII数字。
/// 两个名称的规范键完全相等（ASCII区分大小写）即视为同一车手。
/// 结果可能为空串，此时所有这类名称会归并到同一个键下。
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || ('\u{4E00}'..='\u{9FFF}').contains(c))
        .collect()
}
