//! Line sequence and fenced-code context for one lint pass.

/// Returns true if the line opens or closes a fenced code block.
///
/// Leading whitespace is ignored; the line must then start with three or more
/// backticks or three or more tildes.
#[must_use]
pub fn is_fence_marker(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Reports whether `lines[index]` lies inside a fenced code block by scanning
/// every preceding line.
///
/// Quadratic when called for every line; [`CodeContext`] computes the same
/// answer for all lines in one pass.
///
/// # Panics
/// Panics if `index > lines.len()`.
#[must_use]
pub fn is_in_code_block<S: AsRef<str>>(lines: &[S], index: usize) -> bool {
    lines[..index]
        .iter()
        .filter(|line| is_fence_marker(line.as_ref()))
        .count()
        % 2
        == 1
}

/// Precomputed "inside code" flag for every line of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeContext {
    inside: Vec<bool>,
}

impl CodeContext {
    #[must_use]
    pub fn scan<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut in_code = false;
        let inside = lines
            .iter()
            .map(|line| {
                let state = in_code;
                if is_fence_marker(line.as_ref()) {
                    in_code = !in_code;
                }
                state
            })
            .collect();
        Self { inside }
    }

    /// Out-of-range indices report `false`.
    #[must_use]
    pub fn is_in_code_block(&self, index: usize) -> bool {
        self.inside.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inside.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }
}

/// A physical source line handed to checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// 0-based index into the document.
    pub index: usize,
    pub text: &'a str,
}

/// Immutable snapshot of one file's lines plus their code context.
///
/// Lines that are not valid UTF-8 are kept as empty placeholders so numbering
/// stays aligned, and no check ever sees them.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
    readable: Vec<bool>,
    context: CodeContext,
}

impl Document {
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let lines: Vec<String> = source.lines().map(str::to_string).collect();
        let readable = vec![true; lines.len()];
        Self::build(lines, readable)
    }

    /// Split raw bytes on `\n` (dropping a trailing `\r`), decoding each line
    /// independently.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut segments: Vec<&[u8]> = bytes.split(|b| *b == b'\n').collect();
        if bytes.is_empty() || bytes.ends_with(b"\n") {
            segments.pop();
        }

        let mut lines = Vec::with_capacity(segments.len());
        let mut readable = Vec::with_capacity(segments.len());
        for segment in segments {
            let segment = segment.strip_suffix(b"\r").unwrap_or(segment);
            if let Ok(text) = std::str::from_utf8(segment) {
                lines.push(text.to_string());
                readable.push(true);
            } else {
                lines.push(String::new());
                readable.push(false);
            }
        }
        Self::build(lines, readable)
    }

    fn build(lines: Vec<String>, readable: Vec<bool>) -> Self {
        let context = CodeContext::scan(&lines);
        Self {
            lines,
            readable,
            context,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn is_in_code_block(&self, index: usize) -> bool {
        self.context.is_in_code_block(index)
    }

    #[must_use]
    pub fn unreadable_lines(&self) -> usize {
        self.readable.iter().filter(|ok| !**ok).count()
    }

    /// Every readable line, code blocks included.
    pub fn all_lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(index, _)| self.readable[*index])
            .map(|(index, text)| Line {
                number: index + 1,
                index,
                text,
            })
    }

    /// Readable lines outside fenced code blocks.
    pub fn prose_lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.all_lines()
            .filter(|line| !self.context.is_in_code_block(line.index))
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
