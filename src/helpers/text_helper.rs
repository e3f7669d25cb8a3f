/// Line terminator used when re-joining a merged document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") { LineEnding::CrLf } else { LineEnding::Lf }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

pub struct TextHelper;

impl TextHelper {
    /// Splits on `\n` and drops one trailing `\r` per line. An empty text is a
    /// single empty line, and a trailing newline yields a trailing empty line.
    pub fn split_lines(text: &str) -> Vec<&str> {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }

    pub fn join_lines<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
        let mut joined = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                joined.push_str(ending.as_str());
            }
            joined.push_str(line.as_ref());
        }
        joined
    }
}
