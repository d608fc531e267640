use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn person_name(&self, text: &str) -> ColoredString {
        text.yellow().bold()
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        text.cyan().bold()
    }

    pub fn label(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn rank_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn score(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
