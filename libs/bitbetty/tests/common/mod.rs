//! Common test utilities for BitBetty integration tests
//!
//! In-memory stand-ins for the price feed and the scoring backend.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use bitbetty::domain::{GuessRequest, PriceSource, ScoreService};

/// Let spawned tasks run without moving the clock noticeably
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

/// Price feed returning scripted readings, then repeating `fallback`
pub struct FakePrices {
    script: Mutex<VecDeque<Option<f64>>>,
    fallback: Option<f64>,
    calls: AtomicUsize,
}

impl FakePrices {
    /// `None` entries simulate a failed request
    pub fn scripted(script: Vec<Option<f64>>, fallback: Option<f64>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn constant(price: f64) -> Self {
        Self::scripted(Vec::new(), Some(price))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for FakePrices {
    async fn current_price(&self) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front().unwrap_or(self.fallback);
        next.ok_or_else(|| anyhow!("price feed unavailable"))
    }
}

/// Scoring backend holding a single mutable score
pub struct FakeScores {
    score: Mutex<i64>,
    submitted: Mutex<Vec<GuessRequest>>,
    fetches: AtomicUsize,
    fail_submit: AtomicBool,
    fail_fetch: AtomicBool,
}

impl FakeScores {
    pub fn new(score: i64) -> Self {
        Self {
            score: Mutex::new(score),
            submitted: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
            fail_submit: AtomicBool::new(false),
            fail_fetch: AtomicBool::new(false),
        }
    }

    pub fn set_score(&self, score: i64) {
        *self.score.lock() = score;
    }

    pub fn fail_submissions(&self, fail: bool) {
        self.fail_submit.store(fail, Ordering::SeqCst);
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    /// Every submission attempt, failed ones included
    pub fn submitted(&self) -> Vec<GuessRequest> {
        self.submitted.lock().clone()
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoreService for FakeScores {
    async fn submit_guess(&self, guess: &GuessRequest) -> Result<()> {
        self.submitted.lock().push(guess.clone());
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(anyhow!("backend returned 500"));
        }
        Ok(())
    }

    async fn fetch_score(&self, _username: &str) -> Result<i64> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(anyhow!("backend unreachable"));
        }
        Ok(*self.score.lock())
    }
}
