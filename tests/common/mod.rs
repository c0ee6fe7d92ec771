#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use bsa_terminal::fetch::{FetchOutcome, Fetcher, UnavailableReason};
use serde_json::Value;

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

pub fn fixture_value(name: &str) -> Value {
    serde_json::from_str(&read_fixture(name)).expect("fixture should be valid json")
}

pub fn ok(name: &str) -> FetchOutcome {
    FetchOutcome::Success(fixture_value(name))
}

pub fn down() -> FetchOutcome {
    FetchOutcome::Unavailable(UnavailableReason::Network)
}

/// Answers from a URL table and records every call. Clones share state.
#[derive(Clone, Default)]
pub struct ScriptedFetcher {
    responses: Rc<RefCell<HashMap<String, FetchOutcome>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: impl Into<String>, outcome: FetchOutcome) {
        self.responses.borrow_mut().insert(url.into(), outcome);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|u| u.as_str() == url).count()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self, url: &str) -> FetchOutcome {
        self.calls.borrow_mut().push(url.to_string());
        self.responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or(FetchOutcome::Unavailable(UnavailableReason::Status(404)))
    }
}
