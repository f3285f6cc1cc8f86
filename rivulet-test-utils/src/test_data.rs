// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixtures modelled on the inputs debounce usually sees: a search box being typed into
//! and a window being resized.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TestData {
    /// Contents of a search box after a keystroke
    Query(String),
    /// New window size in pixels
    Resize { width: u32, height: u32 },
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Query(text) => write!(f, "Query[{text}]"),
            TestData::Resize { width, height } => write!(f, "Resize[{width}x{height}]"),
        }
    }
}

fn query(text: &str) -> TestData {
    TestData::Query(text.to_string())
}

pub fn query_r() -> TestData {
    query("r")
}

pub fn query_ru() -> TestData {
    query("ru")
}

pub fn query_rus() -> TestData {
    query("rus")
}

pub fn query_rust() -> TestData {
    query("rust")
}

pub fn query_rusty() -> TestData {
    query("rusty")
}

pub fn resize_small() -> TestData {
    TestData::Resize {
        width: 640,
        height: 480,
    }
}

pub fn resize_large() -> TestData {
    TestData::Resize {
        width: 1920,
        height: 1080,
    }
}
