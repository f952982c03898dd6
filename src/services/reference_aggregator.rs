use crate::{
    models::domain::{
        reference_context::TRUNCATION_MARKER, ReferenceContext, ReferenceDocument,
    },
    services::text_extractor::{Extraction, SkipReason, TextExtractor},
};

/// Filename prefix that marks an uploaded material as a past exam paper.
pub const PREVIOUS_PAPER_PREFIX: &str = "previous-year-paper";
pub const MAX_DOCUMENT_CHARS: usize = 2000;
pub const MAX_CONTEXT_CHARS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextLimits {
    pub max_document_chars: usize,
    pub max_context_chars: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self {
            max_document_chars: MAX_DOCUMENT_CHARS,
            max_context_chars: MAX_CONTEXT_CHARS,
        }
    }
}

pub fn is_previous_paper(document: &ReferenceDocument) -> bool {
    document.file_name.starts_with(PREVIOUS_PAPER_PREFIX)
}

/// Cuts `text` to `max_chars` characters and appends the truncation marker.
pub fn truncate_document(mut text: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
        text.push_str(TRUNCATION_MARKER);
    }
    text
}

pub struct ReferenceAggregator {
    extractor: TextExtractor,
    limits: ContextLimits,
}

impl ReferenceAggregator {
    pub fn new(extractor: TextExtractor) -> Self {
        Self::with_limits(extractor, ContextLimits::default())
    }

    pub fn with_limits(extractor: TextExtractor, limits: ContextLimits) -> Self {
        Self { extractor, limits }
    }

    /// Builds the grounding context from the course's past papers, in listing
    /// order. Unreadable papers are skipped; processing stops once the global
    /// character budget is reached.
    pub async fn build_context(
        &self,
        course_id: &str,
        documents: &[ReferenceDocument],
    ) -> ReferenceContext {
        let papers: Vec<&ReferenceDocument> =
            documents.iter().filter(|d| is_previous_paper(d)).collect();

        log::info!(
            "Found {} previous year papers for course {}",
            papers.len(),
            course_id
        );

        let mut context = ReferenceContext::new();
        for (index, document) in papers.iter().enumerate() {
            let text = match self.extractor.extract(document).await {
                Extraction::Text(text) => text,
                Extraction::Skipped(reason @ SkipReason::UnsupportedType(_)) => {
                    log::debug!("Skipping {}: {}", document.file_name, reason);
                    continue;
                }
                Extraction::Skipped(reason) => {
                    log::warn!(
                        "Error extracting content from {}: {}",
                        document.file_name,
                        reason
                    );
                    continue;
                }
            };

            context.push(
                &document.file_name,
                truncate_document(text, self.limits.max_document_chars),
            );

            if context.total_chars() >= self.limits.max_context_chars {
                log::info!(
                    "Reference context for course {} reached {} characters; omitting {} remaining papers",
                    course_id,
                    context.total_chars(),
                    papers.len() - index - 1
                );
                context.mark_omitted();
                break;
            }
        }

        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        models::domain::reference_context::OMISSION_MARKER,
        storage::MockFileStore,
    };
    use std::{collections::HashMap, sync::Arc};

    fn aggregator_over(files: Vec<(&str, Vec<u8>)>) -> ReferenceAggregator {
        let files: HashMap<String, Vec<u8>> = files
            .into_iter()
            .map(|(path, bytes)| (path.to_string(), bytes))
            .collect();
        let mut store = MockFileStore::new();
        store.expect_read().returning(move |path| {
            files
                .get(path)
                .cloned()
                .ok_or_else(|| AppError::StorageError(format!("{} not found", path)))
        });
        ReferenceAggregator::new(TextExtractor::new(Arc::new(store)))
    }

    fn paper(name: &str, declared_type: &str) -> ReferenceDocument {
        ReferenceDocument::new(name, declared_type, name)
    }

    #[test]
    fn truncate_document_keeps_short_text() {
        assert_eq!(truncate_document("abc".to_string(), 3), "abc");
        assert_eq!(truncate_document("abcd".to_string(), 3), "abc... (truncated)");
    }

    #[test]
    fn truncate_document_respects_char_boundaries() {
        let truncated = truncate_document("ééééé".to_string(), 2);
        assert_eq!(truncated, "éé... (truncated)");
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert!(is_previous_paper(&paper("previous-year-paper-2021.pdf", "pdf")));
        assert!(!is_previous_paper(&paper("Previous-Year-Paper-2021.pdf", "pdf")));
        assert!(!is_previous_paper(&paper("notes-previous-year-paper.pdf", "pdf")));
    }

    #[tokio::test]
    async fn non_paper_materials_never_contribute() {
        let aggregator = aggregator_over(vec![
            ("lecture-notes.txt", b"Heaps and tries".to_vec()),
            ("previous-year-paper-2022.txt", b"Q1. Define a heap.".to_vec()),
        ]);
        let documents = vec![
            paper("lecture-notes.txt", "txt"),
            paper("previous-year-paper-2022.txt", "txt"),
        ];

        let context = aggregator.build_context("CS201", &documents).await;

        assert_eq!(context.document_names(), vec!["previous-year-paper-2022.txt"]);
        assert!(!context.render().contains("Heaps and tries"));
    }

    #[tokio::test]
    async fn each_paper_is_capped_at_two_thousand_characters() {
        let aggregator = aggregator_over(vec![
            ("previous-year-paper-a.txt", "a".repeat(3000).into_bytes()),
            ("previous-year-paper-b.txt", "b".repeat(9000).into_bytes()),
        ]);
        let documents = vec![
            paper("previous-year-paper-a.txt", "txt"),
            paper("previous-year-paper-b.txt", "txt"),
        ];

        let context = aggregator.build_context("CS201", &documents).await;

        let entries = context.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, format!("{}{}", "a".repeat(2000), TRUNCATION_MARKER));
        assert_eq!(entries[1].text, format!("{}{}", "b".repeat(2000), TRUNCATION_MARKER));
        assert!(!entries[1].text.contains(&"b".repeat(2001)));
        assert_eq!(context.total_chars(), 2 * (2000 + TRUNCATION_MARKER.len()));
        assert!(!context.is_omitted());
    }

    #[tokio::test]
    async fn global_budget_stops_processing_and_marks_omission() {
        let names: Vec<String> = (1..=6)
            .map(|i| format!("previous-year-paper-{}.txt", i))
            .collect();
        let aggregator = aggregator_over(
            names
                .iter()
                .map(|n| (n.as_str(), "x".repeat(3000).into_bytes()))
                .collect(),
        );
        let documents: Vec<ReferenceDocument> =
            names.iter().map(|n| paper(n, "txt")).collect();

        let context = aggregator.build_context("CS201", &documents).await;

        // 5 * 2015 characters crosses the 10,000 budget.
        assert_eq!(context.entries().len(), 5);
        assert!(context.is_omitted());
        assert!(context.render().ends_with(OMISSION_MARKER));
        assert!(!context.render().contains("previous-year-paper-6.txt"));
    }

    #[tokio::test]
    async fn unreadable_and_unsupported_papers_are_skipped() {
        let aggregator = aggregator_over(vec![(
            "previous-year-paper-2023.txt",
            b"Q2. Compare BFS and DFS.".to_vec(),
        )]);
        let documents = vec![
            paper("previous-year-paper-missing.pdf", "pdf"),
            paper("previous-year-paper-2022.docx", "docx"),
            paper("previous-year-paper-2023.txt", "txt"),
        ];

        let context = aggregator.build_context("CS201", &documents).await;

        assert_eq!(context.document_names(), vec!["previous-year-paper-2023.txt"]);
        assert_eq!(
            context.render(),
            "=== previous-year-paper-2023.txt ===\nQ2. Compare BFS and DFS.\n\n"
        );
    }

    #[tokio::test]
    async fn no_qualifying_papers_yields_empty_context() {
        let aggregator = aggregator_over(vec![]);
        let documents = vec![paper("syllabus.pdf", "pdf")];

        let context = aggregator.build_context("CS201", &documents).await;

        assert!(context.is_empty());
        assert_eq!(context.render(), "");
    }
}
