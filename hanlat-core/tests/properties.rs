//! Property tests for extraction, splitting and cleaning

use hanlat_core::cleaner::{clean, is_punctuation_only};
use hanlat_core::splitter::line_count;
use hanlat_core::{extract, split_after, Category, CategoryBuffers, CharClass, CharSet, Pipeline};
use proptest::prelude::*;

const ALPHABET: &[char] = &[
    'a', 'Z', 'q', '0', '7', ' ', '\t', ',', '.', '!', '?', ';', ':', '\'', '"', '(', ')', '|',
    '\\', '/', '-', '中', '文', '世', '界', '〇', '。', '，', '！', '？', '：', '；', '、', '…',
    '—', '【', '】', '《', '》', '“', '”', '丨', '︱', '０', 'é', 'あ',
];

fn mixed_line() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(mixed_line(), 0..6).prop_map(|lines| lines.join("\n"))
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|ch| rest.any(|c| c == ch))
}

fn sorted_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_unstable();
    lines
}

proptest! {
    #[test]
    fn extracted_segments_form_a_subsequence(line in mixed_line()) {
        for class in [CharClass::ChineseRun, CharClass::LatinRun] {
            let segments: Vec<&str> = extract(&line, &class).collect();
            prop_assert!(segments.iter().all(|s| !s.is_empty()));
            prop_assert!(is_subsequence(&segments.concat(), &line));
        }
    }

    #[test]
    fn outputs_stay_within_their_class(text in mixed_text()) {
        let buffers = CategoryBuffers::from_text(&text);
        let pipeline = Pipeline::mixed();

        let chinese = buffers.render(Category::Chinese, &pipeline);
        prop_assert!(chinese.chars().all(|ch| ch == '\n' || CharClass::ChineseRun.contains(ch)));

        let latin = buffers.render(Category::Latin, &pipeline);
        prop_assert!(latin.chars().all(|ch| ch == '\n' || CharClass::LatinRun.contains(ch)));
    }

    #[test]
    fn combined_is_union_of_chinese_and_latin(text in mixed_text()) {
        let buffers = CategoryBuffers::from_text(&text);
        let pipeline = Pipeline::mixed();

        let chinese = buffers.render(Category::Chinese, &pipeline);
        let latin = buffers.render(Category::Latin, &pipeline);
        let combined = buffers.render(Category::Combined, &pipeline);

        let mut expected = sorted_lines(&chinese);
        expected.extend(sorted_lines(&latin));
        expected.sort_unstable();
        prop_assert_eq!(sorted_lines(&combined), expected);
    }

    #[test]
    fn emitted_lines_carry_content(text in mixed_text()) {
        let buffers = CategoryBuffers::from_text(&text);
        let pipeline = Pipeline::mixed();

        for category in Category::ALL {
            let rendered = buffers.render(category, &pipeline);
            for line in rendered.split('\n').filter(|_| !rendered.is_empty()) {
                prop_assert!(!line.trim().is_empty());
                prop_assert_eq!(line, line.trim());
                prop_assert!(!is_punctuation_only(line, &CharClass::PunctuationOnly));
            }
        }
    }

    #[test]
    fn cleaning_is_idempotent(text in mixed_text()) {
        let filter = CharClass::PunctuationOnly;
        let once = clean(&text, Some(&filter));
        prop_assert_eq!(clean(&once, Some(&filter)), once.clone());

        let once = clean::<CharClass>(&text, None);
        prop_assert_eq!(clean::<CharClass>(&once, None), once.clone());
    }

    #[test]
    fn splitting_never_loses_lines(text in mixed_text()) {
        for class in [CharClass::SplitterPunctuation, CharClass::SentenceBreak] {
            let split = split_after(&text, &class);
            prop_assert!(line_count(&split) >= line_count(&text));
        }
    }
}
