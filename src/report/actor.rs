//! # Report Actor
//!
//! The console is the only resource every pipeline shares. Instead of locking
//! it, a single [`ReportActor`] owns the [`EventSink`] and receives events over
//! a channel; pipelines hold cheap [`ReportClient`] clones.
//!
//! Lines from different orders interleave freely, but each line is written
//! whole, and the events sent by one task keep their order.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::{EventSink, ReportEvent};

/// Errors returned by [`ReportClient`] calls that expect an answer.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ReportError {
    #[error("Report actor closed")]
    ActorClosed,
    #[error("Report actor dropped response channel")]
    ActorDropped,
}

/// Internal message type sent to the actor.
#[derive(Debug)]
pub enum ReportRequest {
    Event(ReportEvent),
    /// Answered once every event queued before it has been recorded.
    Flush { respond_to: oneshot::Sender<()> },
}

// =============================================================================
// THE ACTOR
// =============================================================================

pub struct ReportActor {
    receiver: mpsc::Receiver<ReportRequest>,
    sink: Box<dyn EventSink>,
}

impl ReportActor {
    /// A `buffer_size` of 0 is raised to 1; a mailbox needs room for one event.
    pub fn new(buffer_size: usize, sink: impl EventSink) -> (Self, ReportClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            sink: Box::new(sink),
        };
        (actor, ReportClient::new(sender))
    }

    /// Records events until every client has been dropped.
    pub async fn run(mut self) {
        debug!("Report actor started");
        let mut recorded = 0usize;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ReportRequest::Event(event) => {
                    self.sink.record(&event);
                    recorded += 1;
                }
                ReportRequest::Flush { respond_to } => {
                    let _ = respond_to.send(());
                }
            }
        }

        debug!(recorded, "Report actor stopped");
    }
}

// =============================================================================
// THE CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ReportClient {
    sender: mpsc::Sender<ReportRequest>,
}

impl ReportClient {
    pub fn new(sender: mpsc::Sender<ReportRequest>) -> Self {
        Self { sender }
    }

    /// Queues one line. A closed actor only costs the line, never the caller.
    pub async fn report(&self, event: ReportEvent) {
        if let Err(mpsc::error::SendError(ReportRequest::Event(event))) =
            self.sender.send(ReportRequest::Event(event)).await
        {
            warn!(
                order_id = ?event.order_id(),
                line = %event,
                "Report actor closed, line dropped"
            );
        }
    }

    /// Waits until everything queued so far has reached the sink.
    pub async fn flush(&self) -> Result<(), ReportError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ReportRequest::Flush { respond_to })
            .await
            .map_err(|_| ReportError::ActorClosed)?;
        response.await.map_err(|_| ReportError::ActorDropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;
    use crate::report::MemorySink;

    #[tokio::test]
    async fn test_events_keep_send_order() {
        let sink = MemorySink::new();
        let (actor, client) = ReportActor::new(4, sink.clone());
        let handle = tokio::spawn(actor.run());

        for id in 1..=10 {
            client.report(ReportEvent::Validated(OrderId(id))).await;
        }
        client.flush().await.unwrap();

        let ids: Vec<u32> = sink
            .events()
            .iter()
            .filter_map(|e| e.order_id())
            .map(|id| id.0)
            .collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_actor_does_not_fail_reporter() {
        let (actor, client) = ReportActor::new(1, MemorySink::new());
        drop(actor);

        client.report(ReportEvent::BatchStarted).await;
        assert_eq!(client.flush().await, Err(ReportError::ActorClosed));
    }

    #[tokio::test]
    async fn test_zero_buffer_is_raised_to_one() {
        let sink = MemorySink::new();
        let (actor, client) = ReportActor::new(0, sink.clone());
        let handle = tokio::spawn(actor.run());

        client.report(ReportEvent::BatchStarted).await;
        client.report(ReportEvent::AllCompleted).await;
        client.flush().await.unwrap();
        assert_eq!(
            sink.events(),
            vec![ReportEvent::BatchStarted, ReportEvent::AllCompleted]
        );

        drop(client);
        handle.await.unwrap();
    }
}
