use crate::error::SynthesisError;

/// Upper bound on a single excerpt, in characters.
pub const MAX_EXCERPT_CHARS: usize = 5000;

/// How many search hits are fed to the fetch stage.
pub const CONTEXT_DOCUMENTS: usize = 3;

const EXCERPT_SEPARATOR: &str = "\n\n";

/// Plain text taken from one fetched document. Never longer than
/// [`MAX_EXCERPT_CHARS`]; empty when the fetch or parse failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentExcerpt(String);

impl DocumentExcerpt {
    pub fn new(text: &str) -> Self {
        Self(text.chars().take(MAX_EXCERPT_CHARS).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

/// Excerpts in search-result order, each followed by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedContext(String);

impl AggregatedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the excerpt and its separator, even when the excerpt is empty.
    pub fn push(&mut self, excerpt: &DocumentExcerpt) {
        self.0.push_str(excerpt.as_str());
        self.0.push_str(EXCERPT_SEPARATOR);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of the synthesis stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Generated(String),
    Unavailable(SynthesisError),
}

impl Answer {
    pub fn is_generated(&self) -> bool {
        matches!(self, Answer::Generated(_))
    }

    /// The text sent back to the caller: the model output, or the error description.
    pub fn into_text(self) -> String {
        match self {
            Answer::Generated(text) => text,
            Answer::Unavailable(err) => err.to_string(),
        }
    }
}

impl From<Result<String, SynthesisError>> for Answer {
    fn from(result: Result<String, SynthesisError>) -> Self {
        match result {
            Ok(text) => Answer::Generated(text),
            Err(err) => Answer::Unavailable(err),
        }
    }
}

#[test]
fn test_excerpt_truncates_by_chars() {
    let long = "ә".repeat(MAX_EXCERPT_CHARS + 10);
    let excerpt = DocumentExcerpt::new(&long);
    assert_eq!(excerpt.char_len(), MAX_EXCERPT_CHARS);

    let short = DocumentExcerpt::new("Статья 245");
    assert_eq!(short.as_str(), "Статья 245");
}

#[test]
fn test_context_keeps_separator_for_empty_excerpts() {
    let mut context = AggregatedContext::new();
    context.push(&DocumentExcerpt::new("first"));
    context.push(&DocumentExcerpt::empty());
    context.push(&DocumentExcerpt::new("third"));
    assert_eq!(context.as_str(), "first\n\n\n\nthird\n\n");
}

#[test]
fn test_context_is_bounded() {
    let mut context = AggregatedContext::new();
    let page = "x".repeat(MAX_EXCERPT_CHARS * 4);
    for _ in 0..CONTEXT_DOCUMENTS {
        context.push(&DocumentExcerpt::new(&page));
    }
    assert_eq!(
        context.as_str().len(),
        CONTEXT_DOCUMENTS * (MAX_EXCERPT_CHARS + EXCERPT_SEPARATOR.len())
    );
}

#[test]
fn test_answer_text() {
    let ok = Answer::from(Ok::<_, SynthesisError>("Article 245".to_string()));
    assert!(ok.is_generated());
    assert_eq!(ok.into_text(), "Article 245");

    let failed = Answer::from(Err::<String, _>(SynthesisError::NoValidResponse));
    assert!(!failed.is_generated());
    assert_eq!(failed.into_text(), "Error: No valid response from the AI model");
}
