use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static INCLUDE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"#include\s+"(.+?)""#).unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeDirective<'a> {
    span: Range<usize>,
    path: &'a str,
}

impl<'a> IncludeDirective<'a> {
    pub fn new(span: Range<usize>, path: &'a str) -> Self {
        Self { span, path }
    }

    /// Byte range of the whole directive in the source text.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn path(&self) -> &'a str {
        self.path
    }
}

/// Yields include directives in source order without overlaps.
pub fn find_directives(source: &str) -> impl Iterator<Item = IncludeDirective<'_>> {
    INCLUDE_PATTERN.captures_iter(source).filter_map(|captures| {
        Some(IncludeDirective::new(
            captures.get(0)?.range(),
            captures.get(1)?.as_str(),
        ))
    })
}
