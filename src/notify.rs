//! Publishing board activity to external observers.
//!
//! Observers read a named exposed variable when a named event fires, so a
//! variable write must be complete before the matching event goes out.

use crate::error::{BoardError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::{broadcast, RwLock};

/// Sink for exposed variables and events
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Writes a named variable; resolves once observers can read it
    async fn set_exposed_variable(&self, name: &str, value: Value) -> Result<()>;

    /// Raises a named event
    async fn fire_event(&self, name: &str) -> Result<()>;
}

/// Writes `value` to `variable`, then fires `event` once the write resolved.
///
/// A failed write stops the sequence: the event is not fired.
pub async fn publish_then_fire<T>(
    sink: &dyn NotificationSink,
    variable: &str,
    value: &T,
    event: &str,
) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    sink.set_exposed_variable(variable, value).await?;
    tracing::debug!(variable, event, "exposed variable written, firing event");
    sink.fire_event(event).await
}

/// In-process sink: variables in a map, events broadcast to subscribers
pub struct ExposedState {
    variables: RwLock<HashMap<String, Value>>,
    events: broadcast::Sender<String>,
}

impl ExposedState {
    const DEFAULT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a sink whose event channel buffers `capacity` events per
    /// lagging subscriber
    pub fn with_capacity(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self {
            variables: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Subscribes to fired event names
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.events.subscribe()
    }

    /// Reads an exposed variable
    pub async fn variable(&self, name: &str) -> Option<Value> {
        self.variables.read().await.get(name).cloned()
    }

    /// Reads an exposed variable into a typed payload
    pub async fn variable_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.variable(name).await {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}

impl Default for ExposedState {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for ExposedState {
    async fn set_exposed_variable(&self, name: &str, value: Value) -> Result<()> {
        self.variables.write().await.insert(name.to_string(), value);
        Ok(())
    }

    async fn fire_event(&self, name: &str) -> Result<()> {
        // No subscribers is not a failure; the event simply has no audience.
        if self.events.send(name.to_string()).is_err() {
            tracing::trace!(event = name, "event fired with no subscribers");
        }
        Ok(())
    }
}

/// One call received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    SetVariable { name: String, value: Value },
    FireEvent { name: String },
}

/// Sink that records every call in arrival order
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
    fail_variable_writes: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose variable writes always fail
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_variable_writes: true,
        }
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SinkCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn set_exposed_variable(&self, name: &str, value: Value) -> Result<()> {
        if self.fail_variable_writes {
            return Err(BoardError::Notification(format!(
                "variable {} rejected",
                name
            )));
        }
        self.lock().push(SinkCall::SetVariable {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    async fn fire_event(&self, name: &str) -> Result<()> {
        self.lock().push(SinkCall::FireEvent {
            name: name.to_string(),
        });
        Ok(())
    }
}
