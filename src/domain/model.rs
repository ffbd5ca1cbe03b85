use serde::{Deserialize, Serialize};

// 一次翻译请求（仅在单次调用内存在）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub destination_lang: String,
}

impl TranslationRequest {
    pub fn new(destination_lang: &str, text: &str, source_lang: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            source_lang: source_lang.map(str::to_string),
            destination_lang: destination_lang.to_string(),
        }
    }
}

// 翻译结果 (用于 --json 输出)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    #[serde(flatten)]
    pub request: TranslationRequest,
    pub translated: String,
}

/// Code a backend reports for text it cannot classify.
pub const UNDETECTABLE_SENTINEL: &str = "zh-CN";

// 语言检测结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    pub language: String,
    pub confidence: Option<f64>,
}

impl Detection {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            confidence: None,
        }
    }

    /// The result for text the backend cannot classify.
    pub fn undetectable() -> Self {
        Self::new(UNDETECTABLE_SENTINEL)
    }

    pub fn is_undetectable(&self) -> bool {
        self.language == UNDETECTABLE_SENTINEL
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub abbreviation: String,
    pub name: String,
}
