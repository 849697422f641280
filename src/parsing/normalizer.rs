use super::SegmentOptions;
use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid blank-line regex"));

/// 使用默认符号集合清洗正文
pub fn normalize(text: &str) -> String {
    normalize_symbols(text, &SegmentOptions::default().strip_symbols)
}

/// 按选项清洗正文
pub fn normalize_with(text: &str, options: &SegmentOptions) -> String {
    normalize_symbols(text, &options.strip_symbols)
}

/// 清洗步骤：
/// 1. 删除 `symbols` 中的所有字符（直接删除，不替换成空格）
/// 2. 连续两个以上换行压缩为一个空行
/// 3. 去掉首尾空白
fn normalize_symbols(text: &str, symbols: &str) -> String {
    let stripped: String = text.chars().filter(|c| !symbols.contains(*c)).collect();
    BLANK_LINES
        .replace_all(&stripped, "\n\n")
        .trim()
        .to_string()
}

/// 清洗 AI 评语：去掉 markdown 强调、标题、行内代码和下划线
pub fn strip_feedback_markdown(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '#' | '`' | '_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_symbols() {
        assert_eq!(normalize("**Bold** and ### heading!"), "Bold and  heading");
        assert_eq!(normalize("> quote @user $var"), "quote user var");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\nb"), "a\nb");
    }

    #[test]
    fn test_symbol_removal_can_create_blank_run() {
        assert_eq!(normalize("a\n\n###\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_plain_text_is_only_trimmed() {
        let samples = ["  hello world  ", "line one\nline two\n\n", "\tcode-free prose"];
        for t in samples {
            assert_eq!(normalize(t), t.trim());
        }
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "**a**\n\n\n\n# b",
            "  >> quoted\n\n\n!!",
            "x\n\n \n\ny",
            "$$$",
        ];
        for t in samples {
            let once = normalize(t);
            assert_eq!(normalize(&once), once, "input: {t:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("*#@!$>"), "");
    }

    #[test]
    fn test_custom_symbols() {
        let options = SegmentOptions {
            strip_symbols: "*".to_string(),
            include_language_tag: true,
        };
        assert_eq!(normalize_with("**# Title**", &options), "# Title");
    }

    #[test]
    fn test_strip_feedback_markdown() {
        assert_eq!(
            strip_feedback_markdown("## Great job, **Ana**! Try `map_err`."),
            " Great job, Ana! Try maperr."
        );
    }
}
