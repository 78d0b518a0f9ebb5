//! Best-effort cleanup of raw model output into a title list.
//!
//! The model is instructed to emit one title per line with no commentary,
//! but it sometimes echoes template instructions, example lines, or adds
//! numbering. The line filter here is a heuristic: it can drop a legitimate
//! title that happens to contain a marker phrase, and it can let unlisted
//! boilerplate through. That imprecision is accepted, not a bug to fix.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on the number of titles returned to the caller.
pub const MAX_TITLES: usize = 10;

/// Substrings of template instruction text the model may echo back.
const BOILERPLATE_MARKERS: [&str; 5] = ["示例：", "要求：", "注意：", "风格：", "你是一个"];

// Leading numbering such as "1." or "3、".
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.、]").unwrap());

/// Parse raw generated text into at most [`MAX_TITLES`] clean title lines,
/// preserving their order of appearance. Never fails; an empty result is a
/// valid outcome.
pub fn extract_titles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| is_title_line(line))
        .take(MAX_TITLES)
        .map(str::to_string)
        .collect()
}

fn is_title_line(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with("//")
        && !BOILERPLATE_MARKERS.iter().any(|marker| line.contains(marker))
        && !NUMBERED_LINE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_numbering_examples_and_blank_lines() {
        let raw = "1. 标题A\n示例：标题B\n\n真实标题C";
        assert_eq!(extract_titles(raw), vec!["真实标题C"]);
    }

    #[test]
    fn drops_instruction_echoes() {
        let raw = concat!(
            "你是一个小红书爆款标题生成器\n",
            "要求：每个标题不超过20字\n",
            "风格：活泼、种草\n",
            "⚠️ 注意：不要解释词语含义！\n",
            "// 生成结果\n",
            "谁懂啊！健身3个月腰围狂减8cm！",
        );
        assert_eq!(extract_titles(raw), vec!["谁懂啊！健身3个月腰围狂减8cm！"]);
    }

    #[test]
    fn drops_full_width_enumeration_numbering() {
        let raw = "3、速看！这招真的绝了\n速看！这招真的绝了";
        assert_eq!(extract_titles(raw), vec!["速看！这招真的绝了"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let raw = "  打工人必看！5分钟搞定周报  \n";
        assert_eq!(extract_titles(raw), vec!["打工人必看！5分钟搞定周报"]);
    }

    #[test]
    fn caps_output_at_first_ten_lines_in_order() {
        let raw = (1..=15)
            .map(|i| format!("标题第{}行", i))
            .collect::<Vec<_>>()
            .join("\n");
        let titles = extract_titles(&raw);
        assert_eq!(titles.len(), MAX_TITLES);
        assert_eq!(titles[0], "标题第1行");
        assert_eq!(titles[9], "标题第10行");
    }

    #[test]
    fn all_boilerplate_input_yields_empty_list() {
        let raw = "要求：理性\n示例：某标题\n\n   \n// 注释\n1. 编号标题";
        assert_eq!(extract_titles(raw), Vec::<String>::new());
    }

    #[test]
    fn output_never_contains_empty_or_padded_entries() {
        let raw = "  真标题一  \n\n \t \n真标题二\n示例：假标题";
        let titles = extract_titles(raw);
        assert!(titles.len() <= MAX_TITLES);
        for title in &titles {
            assert!(!title.trim().is_empty());
            assert_eq!(title, title.trim());
        }
    }
}
