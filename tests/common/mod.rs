//! Shared test fixtures: a scripted in-memory upstream and payload builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use lesson_cache::upstream::models::{Block, StepRecord};
use lesson_cache::upstream::{LessonApi, LessonRecord, LessonsPage, Reply, StepsPage};
use lesson_cache::{Error, Result};

pub const JAN_2020: &str = "2020-01-01T00:00:00Z";
pub const FEB_2020: &str = "2020-02-01T00:00:00Z";

pub fn lesson_page(update_date: &str, steps: &[u64]) -> Reply<LessonsPage> {
    Reply::Ok(LessonsPage {
        lessons: vec![LessonRecord {
            update_date: update_date.to_string(),
            steps: steps.to_vec(),
        }],
    })
}

pub fn step_page(block: &str) -> Reply<StepsPage> {
    Reply::Ok(StepsPage {
        steps: vec![StepRecord {
            block: Block {
                name: block.to_string(),
            },
        }],
    })
}

/// What a scripted endpoint answers with.
#[derive(Clone)]
pub enum Scripted<T> {
    Reply(Reply<T>),
    Fail(String),
}

/// In-memory `LessonApi` that answers from scripts and counts calls.
#[derive(Default)]
pub struct FakeApi {
    lessons: Mutex<HashMap<String, Scripted<LessonsPage>>>,
    steps: Mutex<HashMap<u64, Scripted<StepsPage>>>,
    lesson_calls: AtomicUsize,
    step_calls: Mutex<HashMap<u64, usize>>,
    delay: Option<Duration>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps for `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn lesson(&self, id: &str, reply: Reply<LessonsPage>) -> &Self {
        self.lessons
            .lock()
            .insert(id.to_string(), Scripted::Reply(reply));
        self
    }

    pub fn failing_lesson(&self, id: &str, message: &str) -> &Self {
        self.lessons
            .lock()
            .insert(id.to_string(), Scripted::Fail(message.to_string()));
        self
    }

    pub fn step(&self, id: u64, reply: Reply<StepsPage>) -> &Self {
        self.steps.lock().insert(id, Scripted::Reply(reply));
        self
    }

    pub fn failing_step(&self, id: u64, message: &str) -> &Self {
        self.steps
            .lock()
            .insert(id, Scripted::Fail(message.to_string()));
        self
    }

    pub fn lesson_calls(&self) -> usize {
        self.lesson_calls.load(Ordering::SeqCst)
    }

    pub fn step_calls(&self, id: u64) -> usize {
        self.step_calls.lock().get(&id).copied().unwrap_or(0)
    }

    pub fn total_step_calls(&self) -> usize {
        self.step_calls.lock().values().sum()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn answer<T>(scripted: Option<Scripted<T>>) -> Result<Reply<T>> {
    match scripted {
        Some(Scripted::Reply(reply)) => Ok(reply),
        Some(Scripted::Fail(message)) => Err(Error::Upstream(message)),
        None => Ok(Reply::Status(404)),
    }
}

#[async_trait]
impl LessonApi for FakeApi {
    async fn fetch_lesson(&self, lesson_id: &str) -> Result<Reply<LessonsPage>> {
        self.lesson_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        let scripted = self.lessons.lock().get(lesson_id).cloned();
        answer(scripted)
    }

    async fn fetch_step(&self, step_id: u64) -> Result<Reply<StepsPage>> {
        *self.step_calls.lock().entry(step_id).or_insert(0) += 1;
        self.pause().await;
        let scripted = self.steps.lock().get(&step_id).cloned();
        answer(scripted)
    }
}
