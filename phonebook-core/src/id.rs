//! Id Service
//!
//! Generates process-unique contact ids. The production source draws UUID v4;
//! the sequential source gives tests deterministic ids.

/// Issues a fresh id per call, unique within the process.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidSource;

impl UuidSource {
    pub fn new() -> Self {
        UuidSource
    }
}

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `contact-1`, `contact-2`, ... ids for tests.
#[derive(Debug, Default)]
pub struct SequentialSource {
    counter: u64,
}

impl SequentialSource {
    pub fn new() -> Self {
        SequentialSource::default()
    }
}

impl IdSource for SequentialSource {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("contact-{}", self.counter)
    }
}
