//! Per-category accumulation of extracted segments

use std::fmt;

use crate::charset::CharClass;
use crate::extractor::extract;
use crate::joiner::join;
use crate::pipeline::Pipeline;

/// Output category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Chinese-run segments only
    Chinese,
    /// Latin-run segments only
    Latin,
    /// Per line, the Chinese segments followed by the Latin segments
    Combined,
}

impl Category {
    /// Categories in emission order
    pub const ALL: [Category; 3] = [Category::Chinese, Category::Latin, Category::Combined];

    /// Default output file name
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Category::Chinese => "pure_chinese_sentences.txt",
            Category::Latin => "pure_english_sentences.txt",
            Category::Combined => "combined_sentences.txt",
        }
    }

    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chinese => "chinese",
            Category::Latin => "latin",
            Category::Combined => "combined",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Segments collected for all three categories
#[derive(Debug, Default, Clone)]
pub struct CategoryBuffers {
    chinese: Vec<String>,
    latin: Vec<String>,
    combined: Vec<String>,
}

impl CategoryBuffers {
    /// Create empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect buffers from every line of `text`
    pub fn from_text(text: &str) -> Self {
        let mut buffers = Self::new();
        for line in text.lines() {
            buffers.push_line(line);
        }
        buffers
    }

    /// Extract both scripts from one input line
    pub fn push_line(&mut self, line: &str) {
        let chinese: Vec<&str> = extract(line, &CharClass::ChineseRun).collect();
        let latin: Vec<&str> = extract(line, &CharClass::LatinRun).collect();

        self.combined
            .extend(chinese.iter().chain(latin.iter()).map(|s| s.to_string()));
        self.chinese.extend(chinese.into_iter().map(str::to_string));
        self.latin.extend(latin.into_iter().map(str::to_string));
    }

    /// Segments collected for `category`
    pub fn segments(&self, category: Category) -> &[String] {
        match category {
            Category::Chinese => &self.chinese,
            Category::Latin => &self.latin,
            Category::Combined => &self.combined,
        }
    }

    /// Number of segments collected for `category`
    pub fn segment_count(&self, category: Category) -> usize {
        self.segments(category).len()
    }

    /// Join the segments of `category` and run them through `pipeline`
    pub fn render(&self, category: Category, pipeline: &Pipeline) -> String {
        let buffer = join(self.segments(category));
        let rendered = pipeline.run(&buffer);
        log::debug!(
            "rendered {} segments of {} into {} bytes",
            self.segment_count(category),
            category,
            rendered.len()
        );
        rendered
    }
}
