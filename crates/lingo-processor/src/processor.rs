//! Bounded-concurrency chunk processing.
//!
//! A fixed number of workers share one atomic cursor over the chunk list
//! and one cancellation token. A worker claims the next index, runs the
//! chunk through the transport with retries, and claims again until the
//! cursor passes the end or the token is cancelled. The first chunk to
//! exhaust its attempts records the operation's error and cancels the
//! token; calls already in flight are awaited and their results dropped.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use lingo_chunk::{slice, Chunk};
use lingo_types::{Document, Entries, Message, ValidationResult};
use serde_json::Value;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ProcessorConfig;
use crate::error::{MismatchScope, ProcessError, ProcessResult};
use crate::reply::{align_reply, parse_reply};
use crate::task::ChunkTask;
use crate::transport::{ChatTransport, TransportError};

/// Runs documents through a conversation transport chunk by chunk.
pub struct ChunkProcessor {
    transport: Arc<dyn ChatTransport>,
    config: ProcessorConfig,
}

impl ChunkProcessor {
    pub fn new(transport: Arc<dyn ChatTransport>, config: ProcessorConfig) -> Self {
        Self { transport, config }
    }

    /// The current configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Transform `document` with `task`.
    ///
    /// The result lists entries in the order their chunks appear in the
    /// source, regardless of which worker finished first.
    pub async fn process(&self, document: &Document, task: &ChunkTask) -> ProcessResult<Document> {
        let chunks = slice(
            document,
            self.transport.max_prompt_length(),
            Some(self.config.max_chunk_entries),
        )?;
        let chunk_count = chunks.len();
        let workers = self.config.concurrency.max(1).min(chunk_count);

        let interval = self.transport.min_call_interval();
        if !interval.is_zero() {
            debug!(?interval, "transport declares a minimum call interval; not enforced by the pool");
        }
        info!(chunks = chunk_count, workers, "processing document");

        let pool = Arc::new(WorkerPool {
            chunks,
            cursor: AtomicUsize::new(0),
            cancel: CancellationToken::new(),
            failure: Mutex::new(None),
            transport: Arc::clone(&self.transport),
            task: task.clone(),
            max_attempts: self.config.max_attempts(),
        });

        let mut set = JoinSet::new();
        for worker in 0..workers {
            let pool = Arc::clone(&pool);
            set.spawn(async move { pool.run_worker(worker).await });
        }

        let mut completed: Vec<Option<Document>> = vec![None; chunk_count];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(results) => {
                    for (index, output) in results {
                        completed[index] = Some(output);
                    }
                }
                Err(err) => pool.record_failure(None, ProcessError::Worker(err.to_string())),
            }
        }

        if let Some(err) = pool.take_failure() {
            return Err(err);
        }

        let mut merged = Entries::new();
        for (index, output) in completed.into_iter().enumerate() {
            match output {
                Some(Value::Object(entries)) => merged.extend(entries),
                _ => {
                    return Err(ProcessError::Worker(format!(
                        "chunk {index} finished without a result"
                    )))
                }
            }
        }
        let merged = Value::Object(merged);

        if let Some(validator) = &task.validate_whole {
            if let ValidationResult::Invalid { reason, .. } = validator.validate(document, &merged) {
                warn!(%reason, "merged document failed validation");
                return Err(ProcessError::mismatch(MismatchScope::Merge, reason));
            }
        }

        debug!(chunks = chunk_count, "document processed");
        Ok(merged)
    }
}

/// State shared by every worker of one `process` call.
struct WorkerPool {
    chunks: Vec<Chunk>,
    cursor: AtomicUsize,
    cancel: CancellationToken,
    failure: Mutex<Option<ProcessError>>,
    transport: Arc<dyn ChatTransport>,
    task: ChunkTask,
    max_attempts: usize,
}

/// A failed attempt and, if the validator asked for one, the messages that
/// continue the conversation for the next attempt.
struct AttemptFailure {
    error: ProcessError,
    follow_up: Option<Vec<Message>>,
}

impl AttemptFailure {
    fn restart(error: ProcessError) -> Self {
        Self {
            error,
            follow_up: None,
        }
    }
}

impl WorkerPool {
    fn claim(&self) -> Option<&Chunk> {
        if self.cancel.is_cancelled() {
            return None;
        }
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.chunks.get(index)
    }

    async fn run_worker(&self, worker: usize) -> Vec<(usize, Document)> {
        let mut done = Vec::new();
        while let Some(chunk) = self.claim() {
            debug!(worker, chunk = chunk.index, entries = chunk.len(), "chunk claimed");
            match self.process_chunk(chunk).await {
                Ok(Some(output)) => done.push((chunk.index, output)),
                Ok(None) => break,
                Err(err) => {
                    self.record_failure(Some(chunk.index), err);
                    break;
                }
            }
        }
        debug!(worker, completed = done.len(), "worker finished");
        done
    }

    /// Run one chunk to completion. `Ok(None)` means the pool was cancelled
    /// before the chunk succeeded.
    async fn process_chunk(&self, chunk: &Chunk) -> ProcessResult<Option<Document>> {
        let original = chunk.to_document();
        let mut conversation = self.task.prompt_builder.build(chunk);
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            if self.cancel.is_cancelled() {
                return Ok(None);
            }
            let outcome = self.attempt(chunk, &original, &conversation).await;
            if self.cancel.is_cancelled() {
                debug!(chunk = chunk.index, attempt, "pool cancelled; discarding reply");
                return Ok(None);
            }
            match outcome {
                Ok(output) => return Ok(Some(output)),
                Err(failure) => {
                    warn!(
                        chunk = chunk.index,
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %failure.error,
                        "chunk attempt failed"
                    );
                    conversation = match failure.follow_up {
                        Some(follow_up) => {
                            conversation.extend(follow_up);
                            conversation
                        }
                        None => self.task.prompt_builder.build(chunk),
                    };
                    last_error = Some(failure.error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProcessError::Worker(format!("chunk {} was never attempted", chunk.index))
        }))
    }

    async fn attempt(
        &self,
        chunk: &Chunk,
        original: &Document,
        conversation: &[Message],
    ) -> Result<Document, AttemptFailure> {
        let reply = self
            .transport
            .complete(conversation)
            .await
            .map_err(|e| AttemptFailure::restart(e.into()))?;

        let text = match reply.last() {
            Some(message) => message.content.as_str(),
            None => {
                return Err(AttemptFailure::restart(TransportError::EmptyResponse.into()));
            }
        };
        let parsed = parse_reply(text).map_err(|message| {
            AttemptFailure::restart(ProcessError::Parse {
                chunk: chunk.index,
                message,
            })
        })?;
        let parsed = align_reply(original, Value::Object(parsed));

        if let Some(validator) = &self.task.validate_chunk {
            if let ValidationResult::Invalid {
                reason,
                correction_request,
            } = validator.validate(original, &parsed)
            {
                let follow_up = correction_request
                    .map(|correction| reply.into_iter().chain(correction).collect());
                return Err(AttemptFailure {
                    error: ProcessError::mismatch(MismatchScope::Chunk(chunk.index), reason),
                    follow_up,
                });
            }
        }

        Ok(parsed)
    }

    /// Keep the first failure and stop all further claims and retries.
    fn record_failure(&self, chunk: Option<usize>, err: ProcessError) {
        {
            let mut slot = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.is_none() {
                warn!(?chunk, error = %err, "cancelling remaining chunks");
                *slot = Some(err);
            } else {
                debug!(?chunk, error = %err, "discarding later failure");
            }
        }
        self.cancel.cancel();
    }

    fn take_failure(&self) -> Option<ProcessError> {
        self.failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
