use std::fmt;
use std::sync::Arc;

use crate::{
    models::domain::{DocumentType, ReferenceDocument},
    storage::FileStore,
};

/// Why a reference document contributed no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedType(String),
    ReadFailed(String),
    DecodeFailed(String),
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedType(declared) => {
                write!(f, "unsupported document type '{}'", declared)
            }
            SkipReason::ReadFailed(err) => write!(f, "read failed: {}", err),
            SkipReason::DecodeFailed(err) => write!(f, "text extraction failed: {}", err),
            SkipReason::Empty => write!(f, "no extractable text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    Skipped(SkipReason),
}

pub struct TextExtractor {
    file_store: Arc<dyn FileStore>,
}

impl TextExtractor {
    pub fn new(file_store: Arc<dyn FileStore>) -> Self {
        Self { file_store }
    }

    /// Pulls the raw text out of a single document. Never fails: anything
    /// that cannot be read or decoded comes back as `Extraction::Skipped`.
    pub async fn extract(&self, document: &ReferenceDocument) -> Extraction {
        let result = match &document.document_type {
            DocumentType::Pdf => match self.read_bytes(document).await {
                Ok(bytes) => decode_pdf(bytes).await,
                Err(reason) => Err(reason),
            },
            DocumentType::Txt => self.read_bytes(document).await.and_then(decode_text),
            DocumentType::Other(declared) => Err(SkipReason::UnsupportedType(declared.clone())),
        };

        match result {
            Ok(text) if text.trim().is_empty() => Extraction::Skipped(SkipReason::Empty),
            Ok(text) => Extraction::Text(text),
            Err(reason) => Extraction::Skipped(reason),
        }
    }

    async fn read_bytes(&self, document: &ReferenceDocument) -> Result<Vec<u8>, SkipReason> {
        self.file_store
            .read(&document.storage_path)
            .await
            .map_err(|e| SkipReason::ReadFailed(e.to_string()))
    }
}

fn decode_text(bytes: Vec<u8>) -> Result<String, SkipReason> {
    String::from_utf8(bytes).map_err(|e| SkipReason::DecodeFailed(e.to_string()))
}

// PDF decoding is CPU bound and may panic on malformed input.
async fn decode_pdf(bytes: Vec<u8>) -> Result<String, SkipReason> {
    match tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(SkipReason::DecodeFailed(format!("{:?}", err))),
        Err(join_err) => Err(SkipReason::DecodeFailed(join_err.to_string())),
    }
}
