// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_AI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_AI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VARS: [&str; 3] = ["STUDIOBOOKS_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Process-level settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub ai_model: String,
    pub ai_base: String,
    pub db_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            ai_model: DEFAULT_AI_MODEL.into(),
            ai_base: DEFAULT_AI_BASE.into(),
            db_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| {
            lookup(k)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Self {
            api_key: API_KEY_VARS.iter().find_map(|k| get(*k)),
            ai_model: get("STUDIOBOOKS_AI_MODEL").unwrap_or(defaults.ai_model),
            ai_base: get("STUDIOBOOKS_AI_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.ai_base),
            db_path: get("STUDIOBOOKS_DB").map(PathBuf::from),
        }
    }
}
