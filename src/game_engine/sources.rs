use std::fmt;
use std::path::{Path, PathBuf};

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// The subjects offered on the start menu, one question file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    Python,
    Java,
    #[value(name = "javascript")]
    JavaScript,
    Html,
    #[value(name = "csharp")]
    CSharp,
    Ruby,
}

impl QuestionSource {
    /// Menu order.
    pub const ALL: [QuestionSource; 6] = [
        QuestionSource::Python,
        QuestionSource::Java,
        QuestionSource::JavaScript,
        QuestionSource::Html,
        QuestionSource::CSharp,
        QuestionSource::Ruby,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            QuestionSource::Python     => "python.json",
            QuestionSource::Java       => "java.json",
            QuestionSource::JavaScript => "javascript.json",
            QuestionSource::Html       => "html.json",
            QuestionSource::CSharp     => "csharp.json",
            QuestionSource::Ruby       => "ruby.json",
        }
    }

    pub fn color(self) -> Color {
        match self {
            QuestionSource::Python     => Color::Blue,
            QuestionSource::Java       => Color::Red,
            QuestionSource::JavaScript => Color::Yellow,
            QuestionSource::Html       => Color::Magenta,
            QuestionSource::CSharp     => Color::Green,
            QuestionSource::Ruby       => Color::Red,
        }
    }

    /// Parse a 1-based menu number.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        let n: usize = choice.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionSource::Python     => "Python",
            QuestionSource::Java       => "Java",
            QuestionSource::JavaScript => "JavaScript",
            QuestionSource::Html       => "HTML",
            QuestionSource::CSharp     => "C#",
            QuestionSource::Ruby       => "Ruby",
        };
        write!(f, "{}", s)
    }
}

/// Resolve a question file name. A path that does not exist as given is
/// looked up inside `data_dir` instead.
pub fn resolve_path(file: &Path, data_dir: &Path) -> PathBuf {
    if file.exists() || file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_in_order() {
        assert_eq!(QuestionSource::from_menu_choice("1"), Some(QuestionSource::Python));
        assert_eq!(QuestionSource::from_menu_choice(" 5\n"), Some(QuestionSource::CSharp));
        assert_eq!(QuestionSource::from_menu_choice("6"), Some(QuestionSource::Ruby));
    }

    #[test]
    fn out_of_range_choices_are_rejected() {
        for choice in ["0", "7", "-1", "", "python", "1.5"] {
            assert_eq!(QuestionSource::from_menu_choice(choice), None, "choice={choice:?}");
        }
    }

    #[test]
    fn missing_relative_file_falls_back_to_data_dir() {
        let resolved = resolve_path(Path::new("no-such-file-here.json"), Path::new("data"));
        assert_eq!(resolved, Path::new("data").join("no-such-file-here.json"));
    }

    #[test]
    fn every_source_has_a_distinct_file() {
        let mut files: Vec<&str> = QuestionSource::ALL.iter().map(|s| s.file_name()).collect();
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), 6);
    }
}
