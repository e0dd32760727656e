// ============================================================
// Layer 6 — LanguageTool Client
// ============================================================
// GrammarChecker backed by a LanguageTool server's HTTP API:
//
//   POST {base}/v2/check   (form: text, language)
//   → { "matches": [ { "message", "offset", "length",
//                      "replacements": [ { "value" } ] } ] }
//
// LanguageTool reports offsets in UTF-16 code units (it is a
// Java service). The rest of the scorer works in chars, so
// every match is converted before it leaves this module:
//
//   text:   "😀 Thsi"     UTF-16 offset 3  →  char offset 2
//
// The call is blocking and bounded by the configured timeout.
// Failures are returned as errors; the caller decides what a
// failed check means (the scorer fails the request).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::grammar::GrammarMatch;
use crate::domain::traits::GrammarChecker;

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<LtMatch>,
}

#[derive(Debug, Deserialize)]
struct LtMatch {
    message: String,
    offset:  usize,
    length:  usize,
    #[serde(default)]
    replacements: Vec<LtReplacement>,
}

#[derive(Debug, Deserialize)]
struct LtReplacement {
    value: String,
}

pub struct LanguageToolClient {
    client:    reqwest::blocking::Client,
    check_url: String,
    language:  String,
}

impl LanguageToolClient {
    pub fn new(base_url: &str, language: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Cannot build HTTP client for LanguageTool")?;
        Ok(Self {
            client,
            check_url: format!("{}/v2/check", base_url.trim_end_matches('/')),
            language:  language.into(),
        })
    }
}

impl GrammarChecker for LanguageToolClient {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>> {
        let body = self.client
            .post(&self.check_url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .with_context(|| format!("POST {}", self.check_url))?
            .error_for_status()
            .with_context(|| format!("LanguageTool rejected the request ({})", self.check_url))?
            .text()
            .context("Cannot read LanguageTool response")?;

        let matches = parse_check_response(text, &body)?;
        tracing::debug!("LanguageTool returned {} matches", matches.len());
        Ok(matches)
    }
}

/// Decode a /v2/check JSON body into char-offset matches for `text`.
pub fn parse_check_response(text: &str, body: &str) -> Result<Vec<GrammarMatch>> {
    let response: CheckResponse = serde_json::from_str(body)
        .context("Malformed LanguageTool response")?;

    let index = Utf16Index::new(text);
    Ok(response
        .matches
        .into_iter()
        .map(|m| {
            let start = index.char_offset(m.offset);
            let end   = index.char_offset(m.offset.saturating_add(m.length));
            GrammarMatch::new(start, end.saturating_sub(start), m.message)
                .with_replacements(m.replacements.into_iter().map(|r| r.value))
        })
        .collect())
}

/// UTF-16 position of every char boundary in a text
struct Utf16Index {
    /// starts[i] = UTF-16 offset where char i begins; last entry is the total
    starts: Vec<usize>,
}

impl Utf16Index {
    fn new(text: &str) -> Self {
        let mut starts = Vec::with_capacity(text.len() + 1);
        let mut pos = 0usize;
        for c in text.chars() {
            starts.push(pos);
            pos += c.len_utf16();
        }
        starts.push(pos);
        Self { starts }
    }

    /// Char index for a UTF-16 offset. An offset inside a
    /// surrogate pair rounds up to the next char; offsets past
    /// the end map to one past the last char so the reconciler
    /// can clamp them.
    fn char_offset(&self, utf16: usize) -> usize {
        match self.starts.binary_search(&utf16) {
            Ok(i)  => i,
            Err(i) => i,
        }
    }
}
