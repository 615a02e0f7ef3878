//! Scripted backend and recording renderer shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use futures_util::stream;

use crate::{
    error::{ChatDeskError, Result},
    provider::{BoxFuture, ChatBackend, ChatParameters, IncrementStream},
    renderer::Renderer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Stream(String),
    End,
    Inject(String),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn streamed(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Stream(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn injected(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Inject(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    async fn stream_message(&mut self, text: &str) {
        self.calls.push(RenderCall::Stream(text.to_owned()));
    }

    async fn end_stream_message(&mut self) {
        self.calls.push(RenderCall::End);
    }

    async fn inject_message(&mut self, text: &str) {
        self.calls.push(RenderCall::Inject(text.to_owned()));
    }
}

/// One canned backend answer.
pub enum Script {
    /// The request itself fails.
    Reject,
    /// The stream yields these increments, then optionally fails.
    Stream { chunks: Vec<String>, fail: bool },
}

impl Script {
    pub fn increments<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Stream {
            chunks: chunks.into_iter().map(Into::into).collect(),
            fail: false,
        }
    }

    pub fn fail_after<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Stream {
            chunks: chunks.into_iter().map(Into::into).collect(),
            fail: true,
        }
    }
}

/// Plays back one [`Script`] per request and records every request.
pub struct ScriptedBackend {
    scripts: Mutex<VecDeque<Script>>,
    requests: Mutex<Vec<ChatParameters>>,
}

impl ScriptedBackend {
    pub fn new(scripts: impl IntoIterator<Item = Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatParameters> {
        self.requests.lock().unwrap().clone()
    }
}

fn unavailable() -> ChatDeskError {
    ChatDeskError::Backend("backend unavailable".into())
}

impl ChatBackend for ScriptedBackend {
    fn open_stream<'s>(
        &'s self,
        params: ChatParameters,
    ) -> BoxFuture<'s, Result<IncrementStream<'s>>> {
        self.requests.lock().unwrap().push(params);
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted answer left");

        Box::pin(async move {
            match script {
                Script::Reject => Err(unavailable()),
                Script::Stream { chunks, fail } => {
                    let mut items: Vec<Result<String>> = chunks.into_iter().map(Ok).collect();
                    if fail {
                        items.push(Err(unavailable()));
                    }
                    Ok(Box::pin(stream::iter(items)) as IncrementStream<'s>)
                }
            }
        })
    }
}
