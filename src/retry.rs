// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Retry policy for fetching renderer assets from mirrored sources.
//!
//! The policy is data: [`RetryPolicy::plan`] expands it into the exact list of attempts an
//! orchestrator should make, so loaders stay free of nested retry callbacks.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCES: &[&str] = &["https://cdn.jsdelivr.net/npm/", "https://unpkg.com/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Backoff {
    None,
    Fixed { delay: Duration },
    Exponential { base: Duration, max: Duration },
}

impl Backoff {
    /// Delay before attempt `attempt` (0-based). The first attempt never waits.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        match *self {
            Self::None => Duration::ZERO,
            Self::Fixed { delay } => delay,
            Self::Exponential { base, max } => {
                let factor = 1u32.checked_shl(attempt - 1).unwrap_or(u32::MAX);
                base.saturating_mul(factor).min(max)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Budget for a single asset fetch.
    pub attempt_timeout: Duration,
    /// Budget for initialising a renderer (all of its assets). The orchestrator enforces it
    /// across assets; a single attempt never gets more than this.
    pub init_timeout: Duration,
    pub backoff: Backoff,
    /// Base URLs tried in rotation, primary first.
    pub sources: Vec<String>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            attempt_timeout: Duration::from_secs(10),
            init_timeout: Duration::from_secs(20),
            backoff: Backoff::None,
            sources: DEFAULT_SOURCES.iter().map(|source| (*source).to_owned()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub index: u32,
    pub url: String,
    pub delay: Duration,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicyError {
    NoAttempts,
    NoSources,
    ZeroTimeout,
}

impl fmt::Display for RetryPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAttempts => f.write_str("retry policy must allow at least one attempt"),
            Self::NoSources => f.write_str("retry policy must list at least one source"),
            Self::ZeroTimeout => f.write_str("retry policy timeouts must be non-zero"),
        }
    }
}

impl std::error::Error for RetryPolicyError {}

impl RetryPolicy {
    pub fn validate(&self) -> Result<(), RetryPolicyError> {
        if self.max_attempts == 0 {
            return Err(RetryPolicyError::NoAttempts);
        }
        if self.sources.is_empty() {
            return Err(RetryPolicyError::NoSources);
        }
        if self.attempt_timeout.is_zero() || self.init_timeout.is_zero() {
            return Err(RetryPolicyError::ZeroTimeout);
        }
        Ok(())
    }

    /// Expand the policy into concrete attempts for `asset`.
    ///
    /// Relative assets (`"d3@7.8.5/dist/d3.min.js"`) rotate through `sources`. An absolute
    /// URL under one of the sources is tried as given first, then rotates through the other
    /// sources from there; any other absolute URL is retried as-is.
    pub fn plan(&self, asset: &str) -> Result<Vec<Attempt>, RetryPolicyError> {
        self.validate()?;

        let absolute = asset.starts_with("http://") || asset.starts_with("https://");
        let rotation = if absolute { self.split_source(asset) } else { Some((0, asset)) };
        let timeout = self.attempt_timeout.min(self.init_timeout);

        let plan = (0..self.max_attempts)
            .map(|index| {
                let url = match rotation {
                    Some((first, path)) => {
                        let source = &self.sources[(first + index as usize) % self.sources.len()];
                        join_url(source, path)
                    }
                    None => asset.to_owned(),
                };
                Attempt { index, url, delay: self.backoff.delay_for(index), timeout }
            })
            .collect();
        Ok(plan)
    }

    /// Index of the source `url` lives under, and the path below it.
    fn split_source<'a>(&self, url: &'a str) -> Option<(usize, &'a str)> {
        self.sources.iter().enumerate().find_map(|(position, source)| {
            let base = source.trim_end_matches('/');
            let rest = url.strip_prefix(base)?;
            (rest.is_empty() || rest.starts_with('/')).then_some((position, rest))
        })
    }
}

fn join_url(base: &str, asset: &str) -> String {
    match (base.ends_with('/'), asset.starts_with('/')) {
        (true, true) => format!("{base}{}", &asset[1..]),
        (false, false) => format!("{base}/{asset}"),
        _ => format!("{base}{asset}"),
    }
}
