//! 识别文本逐行解析
//!
//! 视觉模型返回的赛果文本格式不统一，常见的有四种行写法：
//! - `第1名: 张三` / `1. 张三`（名次开头）
//! - `张三: 1` / `张三-第1名`（名次结尾）
//! - `张三 10`（名称+积分表格行，数字即积分本身）
//! - `张三`（仅名称，按未完赛计）
//!
//! 按固定优先级逐个文法尝试，先命中者生效；四种都不命中的行直接丢弃。

use lazy_static::lazy_static;
use regex::Regex;

use super::rank::{score_for_rank, DNF_SCORE};

/// 一行解析出的赛果：原始车手名 + 积分
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    pub driver: String,
    pub score: i32,
}

/// 行文法匹配函数：命中返回解析结果，未命中返回 None
type GrammarFn = fn(&str) -> Option<ParsedEntry>;

/// 行文法清单，按优先级排列
const LINE_GRAMMARS: &[GrammarFn] = &[
    match_rank_first,
    match_rank_last,
    match_name_score,
    match_name_only,
];

lazy_static! {
    // 文法1: [第]<名次>[名|.][:|：]<名称>
    static ref RANK_FIRST_RE: Regex =
        Regex::new(r"^第?([0-9]+|[Xx])[名.]\s*[:：]?\s*(.*)$").unwrap();
    // 文法2: <名称>[:|：|-][第]<名次>[名]，分隔符必须紧跟在名称后
    static ref RANK_LAST_RE: Regex =
        Regex::new(r"^(.*\S)[:：-]\s*第?([0-9]+|[Xx])\s*名?\s*$").unwrap();
    // 文法3: <名称> <积分>，名称不以数字或空白开头
    static ref NAME_SCORE_RE: Regex =
        Regex::new(r"^([^\s0-9].*?)\s+(-?[0-9]+|[Xx])$").unwrap();
    // 文法4: 仅名称，整行不含数字和分隔符
    static ref NAME_ONLY_RE: Regex = Regex::new(r"^[^0-9:：-]+$").unwrap();
}

/// 解析一份完整的识别文本，返回车手→积分列表
///
/// 行序即返回顺序。同一名称重复出现时保留首次出现的位置，
/// 积分取最后一行的值。
pub fn parse_transcript(transcript: &str) -> Vec<ParsedEntry> {
    let mut entries: Vec<ParsedEntry> = Vec::new();

    for line in transcript.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(entry) = parse_line(line) else {
            continue;
        };
        match entries.iter().position(|e| e.driver == entry.driver) {
            Some(i) => entries[i].score = entry.score,
            None => entries.push(entry),
        }
    }

    entries
}

/// 按优先级尝试各行文法，返回第一个命中的结果
pub fn parse_line(line: &str) -> Option<ParsedEntry> {
    LINE_GRAMMARS.iter().find_map(|grammar| grammar(line))
}

/// 文法1（名次开头）: `第1名: 张三`、`1. 张三`、`X. 张三`
fn match_rank_first(line: &str) -> Option<ParsedEntry> {
    let caps = RANK_FIRST_RE.captures(line)?;
    let driver = caps[2].trim();
    if driver.is_empty() {
        return None;
    }
    Some(ParsedEntry {
        driver: driver.to_string(),
        score: score_for_rank(&caps[1]),
    })
}

/// 文法2（名次结尾）: `张三: 1`、`张三-第2名`、`张三：X`
fn match_rank_last(line: &str) -> Option<ParsedEntry> {
    let caps = RANK_LAST_RE.captures(line)?;
    Some(ParsedEntry {
        driver: caps[1].trim().to_string(),
        score: score_for_rank(&caps[2]),
    })
}

/// 文法3（名称+积分表格行）: `张三 10`、`李四 -1`、`王五 X`
///
/// 行尾数字是已经算好的积分，原样入表；同样的数字在文法1/2里
/// 表示名次、在这里表示积分，两边语义并不一致，维持现状。
fn match_name_score(line: &str) -> Option<ParsedEntry> {
    let caps = NAME_SCORE_RE.captures(line)?;
    let token = &caps[2];
    let score = if token.eq_ignore_ascii_case("x") {
        DNF_SCORE
    } else {
        token.parse::<i32>().ok()?
    };
    Some(ParsedEntry {
        driver: caps[1].trim().to_string(),
        score,
    })
}

/// 文法4（仅名称）: 整行视为车手名，按未完赛计分
fn match_name_only(line: &str) -> Option<ParsedEntry> {
    if !NAME_ONLY_RE.is_match(line) {
        return None;
    }
    Some(ParsedEntry {
        driver: line.trim().to_string(),
        score: DNF_SCORE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(driver: &str, score: i32) -> ParsedEntry {
        ParsedEntry {
            driver: driver.to_string(),
            score,
        }
    }

    // =============================================
    // 文法1: 名次开头
    // =============================================

    #[test]
    fn test_rank_first_numbered_list() {
        assert_eq!(match_rank_first("1. 张三"), Some(entry("张三", 10)));
        assert_eq!(match_rank_first("2.李四"), Some(entry("李四", 7)));
        assert_eq!(match_rank_first("8. 王五"), Some(entry("王五", -1)));
    }

    #[test]
    fn test_rank_first_di_ming_form() {
        assert_eq!(match_rank_first("第1名: 张三"), Some(entry("张三", 10)));
        assert_eq!(match_rank_first("第3名：王五"), Some(entry("王五", 5)));
        assert_eq!(match_rank_first("第2名李四"), Some(entry("李四", 7)));
    }

    #[test]
    fn test_rank_first_dnf_marker() {
        assert_eq!(match_rank_first("X. Carol"), Some(entry("Carol", -5)));
        assert_eq!(match_rank_first("第x名 赵六"), Some(entry("赵六", -5)));
    }

    #[test]
    fn test_rank_first_out_of_range_rank() {
        // 超出1~8的名次按未完赛计分
        assert_eq!(match_rank_first("9. 张三"), Some(entry("张三", -5)));
    }

    #[test]
    fn test_rank_first_requires_name() {
        assert_eq!(match_rank_first("1. "), None);
        assert_eq!(match_rank_first("第1名"), None);
    }

    // =============================================
    // 文法2: 名次结尾
    // =============================================

    #[test]
    fn test_rank_last_colon_forms() {
        assert_eq!(match_rank_last("Alice:1"), Some(entry("Alice", 10)));
        assert_eq!(match_rank_last("Carol：X"), Some(entry("Carol", -5)));
        assert_eq!(match_rank_last("张三: 第2名"), Some(entry("张三", 7)));
    }

    #[test]
    fn test_rank_last_dash_form() {
        assert_eq!(match_rank_last("Bob-2"), Some(entry("Bob", 7)));
        assert_eq!(match_rank_last("李四-第4名"), Some(entry("李四", 4)));
    }

    #[test]
    fn test_rank_last_separator_must_follow_name() {
        // 名称和分隔符之间有空白时不按文法2处理
        assert_eq!(match_rank_last("Bob -1"), None);
    }

    // =============================================
    // 文法3: 名称+积分
    // =============================================

    #[test]
    fn test_name_score_passthrough() {
        // 行尾数字原样作为积分，不经名次换算
        assert_eq!(match_name_score("Alice 10"), Some(entry("Alice", 10)));
        assert_eq!(match_name_score("Bob -1"), Some(entry("Bob", -1)));
        assert_eq!(match_name_score("王五 3"), Some(entry("王五", 3)));
    }

    #[test]
    fn test_name_score_dnf_marker() {
        assert_eq!(match_name_score("张三 X"), Some(entry("张三", -5)));
        assert_eq!(match_name_score("张三 x"), Some(entry("张三", -5)));
    }

    #[test]
    fn test_name_score_rejects_leading_digit() {
        assert_eq!(match_name_score("1张三 10"), None);
    }

    #[test]
    fn test_name_score_overflow_token() {
        // 溢出的积分数字不入表
        assert_eq!(match_name_score("张三 99999999999"), None);
    }

    // =============================================
    // 文法4: 仅名称
    // =============================================

    #[test]
    fn test_name_only_fallback() {
        assert_eq!(match_name_only("张三"), Some(entry("张三", -5)));
        assert_eq!(match_name_only("Alice Wang"), Some(entry("Alice Wang", -5)));
    }

    #[test]
    fn test_name_only_rejects_digits_and_separators() {
        assert_eq!(match_name_only("张三1"), None);
        assert_eq!(match_name_only("张三:"), None);
        assert_eq!(match_name_only("张-三"), None);
    }

    // =============================================
    // 整体解析
    // =============================================

    #[test]
    fn test_parse_transcript_rank_first_lines() {
        let entries = parse_transcript("1. Alice\n2. Bob\nX. Carol");
        assert_eq!(
            entries,
            vec![entry("Alice", 10), entry("Bob", 7), entry("Carol", -5)]
        );
    }

    #[test]
    fn test_parse_transcript_rank_last_lines() {
        let entries = parse_transcript("Alice:1\nBob-2\nCarol：X");
        assert_eq!(
            entries,
            vec![entry("Alice", 10), entry("Bob", 7), entry("Carol", -5)]
        );
    }

    #[test]
    fn test_parse_transcript_score_table_lines() {
        let entries = parse_transcript("Alice 10\nBob -1");
        assert_eq!(entries, vec![entry("Alice", 10), entry("Bob", -1)]);
    }

    #[test]
    fn test_parse_transcript_grammar_priority() {
        // 同一数字在文法1里是名次（3→5分）、在文法3里是积分（3分）
        assert_eq!(parse_line("3. 王五"), Some(entry("王五", 5)));
        assert_eq!(parse_line("王五 3"), Some(entry("王五", 3)));
    }

    #[test]
    fn test_parse_transcript_duplicate_name_last_wins() {
        // 重复名称保留首次位置，积分取最后一次
        let entries = parse_transcript("1. 张三\n2. 李四\n3. 张三");
        assert_eq!(entries, vec![entry("张三", 5), entry("李四", 7)]);
    }

    #[test]
    fn test_parse_transcript_skips_unmatched_lines() {
        let entries = parse_transcript("以下是识别结果：\n\n1. 张三\n   \n无法识别第2行内容9\n2. 李四");
        assert_eq!(entries, vec![entry("张三", 10), entry("李四", 7)]);
    }

    #[test]
    fn test_parse_transcript_empty_input() {
        assert!(parse_transcript("").is_empty());
        assert!(parse_transcript("\n\n  \n").is_empty());
    }
}
