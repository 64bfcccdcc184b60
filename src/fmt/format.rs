//! The line layout depends on which optional segments (date, file, prefix) are enabled.
//! Compiling it into a template once per config avoids rebuilding the layout on every call.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Date,
    Label,
    File,
    Line,
    Prefix,
    Msg,
}

impl Placeholder {
    /// Template parsing needs to match brace-delimited names against known placeholders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Label => "label",
            Self::File => "file",
            Self::Line => "line",
            Self::Prefix => "prefix",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Date,
        Self::Label,
        Self::File,
        Self::Line,
        Self::Prefix,
        Self::Msg,
    ];
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, escape codes, and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted with per-call values at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed template, rendered once per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// One-time parse turns `"{label} {prefix} {msg}"` into a segment list.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut i = 0;
        let chars: Vec<char> = template.chars().collect();

        while i < chars.len() {
            if chars[i] == '{'
                && let Some(end) = chars[i..].iter().position(|&c| c == '}')
            {
                let end = i + end;
                let name: String = chars[i + 1..end].iter().collect();

                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                }

                if let Some(ph) = Self::match_placeholder(&name) {
                    segments.push(FormatSegment::Placeholder(ph));
                } else {
                    segments.push(FormatSegment::Literal(format!("{{{name}}}")));
                }

                i = end + 1;
                continue;
            }

            current.push(chars[i]);
            i += 1;
        }

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Whether the template references `ph`.
    #[must_use]
    pub fn contains(&self, ph: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, FormatSegment::Placeholder(p) if *p == ph))
    }

    /// Substitutes per-call values into the pre-parsed segments.
    #[must_use]
    pub fn render(&self, values: &FormatValues<'_>) -> String {
        let mut result = String::with_capacity(values.msg.len() + 64);

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Date => values.date,
                        Placeholder::Label => values.label,
                        Placeholder::File => values.file,
                        Placeholder::Line => values.line,
                        Placeholder::Prefix => values.prefix,
                        Placeholder::Msg => values.msg,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse("{label} {msg}")
    }
}

/// Borrowed values, one field per placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValues<'a> {
    pub date: &'a str,
    pub label: &'a str,
    pub file: &'a str,
    pub line: &'a str,
    pub prefix: &'a str,
    pub msg: &'a str,
}

impl<'a> FormatValues<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn date(mut self, date: &'a str) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub const fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// File and line always travel together in the `[file:line]` segment.
    #[must_use]
    pub const fn location(mut self, file: &'a str, line: &'a str) -> Self {
        self.file = file;
        self.line = line;
        self
    }

    #[must_use]
    pub const fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub const fn msg(mut self, msg: &'a str) -> Self {
        self.msg = msg;
        self
    }
}
