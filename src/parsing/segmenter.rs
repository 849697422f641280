use super::normalizer::normalize_with;
use super::SegmentOptions;
use crate::models::Segment;
use regex::Regex;
use std::sync::LazyLock;

/// 代码围栏：行首三个反引号，可紧跟语言标记
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```([A-Za-z0-9_]+)?").expect("valid fence regex"));

/// 使用默认选项分段
pub fn segment(answer_text: &str) -> Vec<Segment> {
    segment_with(answer_text, &SegmentOptions::default())
}

/// 把一段答案切成正文 / 代码片段，保持原文顺序
///
/// 只有围栏行会切换状态；没有闭合的代码块在结尾仍按代码输出。
pub fn segment_with(answer_text: &str, options: &SegmentOptions) -> Vec<Segment> {
    answer_text
        .split('\n')
        .fold(Accumulator::new(options), Accumulator::feed)
        .finish()
}

#[derive(Debug)]
enum FenceState {
    InText,
    InCode { language: String },
}

/// 扫描过程中的状态：当前模式、缓冲区和已产出的片段
struct Accumulator<'a> {
    options: &'a SegmentOptions,
    state: FenceState,
    buffer: String,
    output: Vec<Segment>,
}

impl<'a> Accumulator<'a> {
    fn new(options: &'a SegmentOptions) -> Self {
        Self {
            options,
            state: FenceState::InText,
            buffer: String::new(),
            output: Vec::new(),
        }
    }

    fn feed(mut self, line: &str) -> Self {
        let Some(caps) = FENCE.captures(line.trim()) else {
            self.buffer.push_str(line);
            self.buffer.push('\n');
            return self;
        };

        let buffer = std::mem::take(&mut self.buffer);
        match std::mem::replace(&mut self.state, FenceState::InText) {
            FenceState::InCode { language } => {
                // 空代码块同样输出
                self.push_code(&buffer, language);
            }
            FenceState::InText => {
                self.push_text(&buffer);
                let language = caps
                    .get(1)
                    .map_or(Segment::DEFAULT_LANGUAGE, |m| m.as_str())
                    .to_string();
                self.state = FenceState::InCode { language };
            }
        }
        self
    }

    fn finish(mut self) -> Vec<Segment> {
        let buffer = std::mem::take(&mut self.buffer);
        if !buffer.trim().is_empty() {
            match std::mem::replace(&mut self.state, FenceState::InText) {
                FenceState::InCode { language } => {
                    tracing::debug!("代码块未闭合，按代码输出 ({})", language);
                    self.push_code(&buffer, language);
                }
                FenceState::InText => self.push_text(&buffer),
            }
        }
        self.output
    }

    fn push_text(&mut self, buffer: &str) {
        let content = normalize_with(buffer, self.options);
        if !content.is_empty() {
            self.output.push(Segment::Text { content });
        }
    }

    fn push_code(&mut self, buffer: &str, language: String) {
        self.output.push(Segment::Code {
            content: buffer.trim().to_string(),
            language: self.options.include_language_tag.then_some(language),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n  \n").is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(segment("Hello world"), vec![Segment::text("Hello world")]);
    }

    #[test]
    fn test_text_code_text() {
        assert_eq!(
            segment("Before\n```js\nconsole.log(1)\n```\nAfter"),
            vec![
                Segment::text("Before"),
                Segment::code("console.log(1)", "js"),
                Segment::text("After"),
            ]
        );
    }

    #[test]
    fn test_fence_without_language() {
        assert_eq!(
            segment("```\nx = 1\n```"),
            vec![Segment::code("x = 1", "plaintext")]
        );
    }

    #[test]
    fn test_code_is_not_normalized() {
        let parts = segment("```rust\n#[derive(Debug)]\nlet x = *ptr;\n\n\n\nfoo!();\n```");
        assert_eq!(
            parts,
            vec![Segment::code(
                "#[derive(Debug)]\nlet x = *ptr;\n\n\n\nfoo!();",
                "rust"
            )]
        );
    }

    #[test]
    fn test_text_segments_are_normalized() {
        let parts = segment("## **Key idea**\n\n\n\nUse `Rc`!\n```\nx\n```");
        assert_eq!(parts[0], Segment::text("Key idea\n\nUse `Rc`"));
    }

    #[test]
    fn test_indented_fence_is_recognised() {
        let parts = segment("Steps:\n   ```python\n   print(1)\n   ```");
        assert_eq!(
            parts,
            vec![Segment::text("Steps:"), Segment::code("print(1)", "python")]
        );
    }

    #[test]
    fn test_unterminated_fence_emits_code() {
        let parts = segment("Intro\n```go\nfmt.Println(1)\n");
        assert_eq!(
            parts,
            vec![Segment::text("Intro"), Segment::code("fmt.Println(1)", "go")]
        );
    }

    #[test]
    fn test_empty_code_block_is_kept() {
        let parts = segment("a\n```sh\n```\nb");
        assert_eq!(
            parts,
            vec![Segment::text("a"), Segment::code("", "sh"), Segment::text("b")]
        );
    }

    #[test]
    fn test_symbol_only_text_is_dropped() {
        let parts = segment("***\n```\ncode\n```\n---");
        assert_eq!(
            parts,
            vec![Segment::code("code", "plaintext"), Segment::text("---")]
        );
    }

    #[test]
    fn test_language_token_stops_at_non_word() {
        assert_eq!(segment("```c++\nint x;\n```")[0].language(), Some("c"));
        assert_eq!(segment("``` js\nx\n```")[0].language(), Some("plaintext"));
    }

    #[test]
    fn test_balanced_fences_yield_half_as_many_code_blocks() {
        let input = "a\n```js\n1\n```\nb\n```\n2\n```\n```py\n3\n```\nc";
        let markers = input
            .split('\n')
            .filter(|l| l.trim().starts_with("```"))
            .count();
        let code_count = segment(input).iter().filter(|s| s.is_code()).count();
        assert_eq!(code_count * 2, markers);
    }

    #[test]
    fn test_language_tag_can_be_disabled() {
        let options = SegmentOptions {
            include_language_tag: false,
            ..SegmentOptions::default()
        };
        let parts = segment_with("```js\nx\n```", &options);
        assert_eq!(
            parts,
            vec![Segment::Code {
                content: "x".to_string(),
                language: None
            }]
        );
    }

    #[test]
    fn test_code_content_reassembles_verbatim() {
        let code = "fn main() {\n    println!(\"*#@\");\n}";
        let input = format!("Intro text\n```rust\n{code}\n```\nOutro");
        let parts = segment(&input);
        let rebuilt: Vec<&str> = parts
            .iter()
            .filter(|s| s.is_code())
            .map(|s| s.content())
            .collect();
        assert_eq!(rebuilt, vec![code]);
    }
}
