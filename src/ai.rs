// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Text drafting through a hosted language model.
//!
//! Prompt construction is plain string building. The network call sits behind
//! [`TextService`] so the assistant can run against a canned stub.

use crate::config::Config;
use crate::models::Transaction;
use crate::utils::{fmt_rupiah, http_client};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

/// How many of the most recent transactions go into an advice prompt.
pub const ADVICE_WINDOW: usize = 20;

pub const MSG_MISSING_KEY: &str =
    "API Key tidak ditemukan. Silakan konfigurasi environment variable.";
pub const MSG_BRIEF_MISSING_KEY: &str = "API Key missing.";
pub const MSG_ADVICE_FAILED: &str = "Maaf, terjadi kesalahan saat menghubungi asisten AI.";
pub const MSG_ADVICE_EMPTY: &str = "Tidak dapat menghasilkan analisis saat ini.";
pub const MSG_BRIEF_FAILED: &str = "Terjadi kesalahan saat membuat brief.";
pub const MSG_BRIEF_EMPTY: &str = "Gagal membuat brief.";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("no API key configured")]
    MissingKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("API response contained no text")]
    EmptyResponse,
}

pub trait TextService {
    fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

pub fn advice_prompt(transactions: &[Transaction]) -> String {
    let lines: Vec<String> = transactions
        .iter()
        .map(|t| {
            format!(
                "- {}: {} ({}) | {} | {}",
                t.date,
                t.description,
                t.category,
                fmt_rupiah(t.amount),
                t.r#type
            )
        })
        .collect();
    format!(
        "Anda adalah konsultan keuangan profesional untuk agensi desain dan freelancer kreatif.\n\
         Analisis data transaksi berikut lalu berikan 3 saran strategis singkat dalam bentuk \
         bullet point untuk meningkatkan profitabilitas dan efisiensi arus kas.\n\
         Gunakan Bahasa Indonesia yang profesional namun mudah dipahami.\n\
         \n\
         Data Transaksi:\n\
         {}\n\
         \n\
         Fokuskan saran pada:\n\
         1. Pos pengeluaran yang bisa dihemat (misalnya langganan software).\n\
         2. Peluang memperbaiki arus kas (misalnya termin pembayaran klien).\n\
         3. Kesehatan keuangan secara umum.\n",
        lines.join("\n")
    )
}

pub fn brief_prompt(topic: &str) -> String {
    format!(
        "Susun kerangka Brief Desain profesional untuk proyek bertopik: \"{}\".\n\
         \n\
         Tulis dalam teks biasa (plain text) dengan struktur:\n\
         1. Tujuan Proyek\n\
         2. Target Audience\n\
         3. Tone & Style Visual\n\
         4. Key Deliverables (misalnya Logo, Banner, IG Post)\n\
         \n\
         Gunakan bahasa Indonesia yang profesional ala agency kreatif.\n",
        topic.trim()
    )
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Text of the first candidate, parts joined in order.
fn response_text(resp: GenerateResponse) -> Option<String> {
    let parts = resp.candidates.into_iter().next()?.content?.parts;
    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Gemini `generateContent` over the blocking HTTP client.
pub struct GeminiService {
    client: reqwest::blocking::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiService {
    pub fn new(api_key: &str, model: &str, base: &str) -> Result<Self, AiError> {
        if api_key.trim().is_empty() {
            return Err(AiError::MissingKey);
        }
        let client = http_client()?;
        Ok(Self {
            client,
            api_key: api_key.trim().to_string(),
            endpoint: format!("{}/models/{}:generateContent", base, model),
        })
    }

    /// `None` when no key is configured.
    pub fn from_config(cfg: &Config) -> Result<Option<Self>, AiError> {
        match &cfg.api_key {
            Some(key) => Self::new(key, &cfg.ai_model, &cfg.ai_base).map(Some),
            None => Ok(None),
        }
    }
}

impl TextService for GeminiService {
    fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "generateContent");
        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let parsed: GenerateResponse = resp.json()?;
        response_text(parsed).ok_or(AiError::EmptyResponse)
    }
}

/// Display text for each way a request can come back without a usable answer.
struct Fallbacks {
    missing_key: &'static str,
    failed: &'static str,
    empty: &'static str,
}

/// Turns model output, or its absence, into text fit for display.
pub struct Assistant<S: TextService> {
    service: Option<S>,
}

impl<S: TextService> Assistant<S> {
    pub fn new(service: Option<S>) -> Self {
        Self { service }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    pub fn service(&self) -> Option<&S> {
        self.service.as_ref()
    }

    /// Advice over the first [`ADVICE_WINDOW`] transactions of a newest-first list.
    pub fn financial_advice(&self, transactions: &[Transaction]) -> String {
        let recent = &transactions[..transactions.len().min(ADVICE_WINDOW)];
        self.ask(
            &advice_prompt(recent),
            Fallbacks {
                missing_key: MSG_MISSING_KEY,
                failed: MSG_ADVICE_FAILED,
                empty: MSG_ADVICE_EMPTY,
            },
        )
    }

    /// `None` for a blank topic; nothing is requested in that case.
    pub fn design_brief(&self, topic: &str) -> Option<String> {
        if topic.trim().is_empty() {
            return None;
        }
        Some(self.ask(
            &brief_prompt(topic),
            Fallbacks {
                missing_key: MSG_BRIEF_MISSING_KEY,
                failed: MSG_BRIEF_FAILED,
                empty: MSG_BRIEF_EMPTY,
            },
        ))
    }

    fn ask(&self, prompt: &str, fallbacks: Fallbacks) -> String {
        let Some(service) = &self.service else {
            warn!("AI request skipped: no API key configured");
            return fallbacks.missing_key.to_string();
        };
        match service.generate(prompt) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(AiError::EmptyResponse) => fallbacks.empty.to_string(),
            Err(AiError::MissingKey) => fallbacks.missing_key.to_string(),
            Err(e) => {
                error!(error = %e, "AI request failed");
                fallbacks.failed.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_parts_are_joined() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"text":"b"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response_text(resp).as_deref(), Some("ab"));
    }

    #[test]
    fn blocked_response_has_no_text() {
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(response_text(resp).is_none());
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(
            GeminiService::new("  ", "m", "http://localhost"),
            Err(AiError::MissingKey)
        ));
    }
}
