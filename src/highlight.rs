use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    #[cfg(test)]
    fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word: cyan for a built-in, red otherwise.
    /// Returns `None` when the line should be shown unchanged.
    pub fn highlight_command<F>(&self, input: &str, is_builtin: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        if !self.enabled() {
            return None;
        }

        let start = input.len() - input.trim_start().len();
        let rest = &input[start..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = &rest[..end];
        if word.is_empty() {
            return None;
        }

        let style = if is_builtin(word) {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().foreground(Color::Red).build()
        };

        Some(format!(
            "{}{}{}",
            &input[..start],
            word.style(style),
            &rest[end..]
        ))
    }
}
