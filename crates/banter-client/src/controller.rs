//! Session controller actor.
//!
//! Owns one [`Session`] and one broker connection inside a single spawned
//! task. User intents and transport events are serialized through the same
//! queue, so there is no locking and no interleaving: each event is applied
//! whole, then a complete snapshot is published over a watch channel.
//!
//! The draft-clear delay requested by the session runs as a timer inside the
//! actor. A new send replaces the pending timer, and dropping the controller
//! kills it along with the actor, so the timer can never outlive the session.

use std::pin::Pin;

use banter_core::{Session, SessionAction, SessionEvent, SessionSnapshot};
use tokio::{
    sync::{mpsc, watch},
    time::Sleep,
};

use crate::{
    config::BrokerConfig,
    transport::{self, ConnectedBroker},
};

/// Capacity of the intent queue.
const INTENT_CAPACITY: usize = 32;

/// Handle to a running chat session.
///
/// Cheap to use from UI code: intent methods enqueue and return, state is
/// read through [`SessionController::subscribe`]. Dropping the handle aborts
/// the actor, which closes the transport and abandons all pending work.
pub struct SessionController {
    intents: mpsc::Sender<SessionEvent>,
    state: watch::Receiver<SessionSnapshot>,
    abort_handle: tokio::task::AbortHandle,
}

impl SessionController {
    /// Open a connection to the broker and start the session actor.
    ///
    /// The transport is dialed immediately; the first published snapshot is
    /// already in the connecting state, and success or failure shows up as a
    /// later state change. Must be called from within a tokio runtime.
    pub fn spawn(config: &BrokerConfig, user_id: Option<String>) -> Self {
        Self::spawn_with_transport(transport::connect(config), user_id)
    }

    /// Start the session actor on an already-bridged transport.
    ///
    /// Used by tests and in-process harnesses together with
    /// [`ConnectedBroker::from_parts`].
    pub fn spawn_with_transport(transport: ConnectedBroker, user_id: Option<String>) -> Self {
        let mut session = match user_id {
            Some(user_id) => Session::with_user_id(user_id),
            None => Session::new(),
        };
        session.begin_connect();

        let (intents_tx, intents_rx) = mpsc::channel(INTENT_CAPACITY);
        let (state_tx, state_rx) = watch::channel(session.snapshot().clone());

        let task = tokio::spawn(run_session(session, transport, intents_rx, state_tx));

        Self { intents: intents_tx, state: state_rx, abort_handle: task.abort_handle() }
    }

    /// Watch the published session snapshots.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.clone()
    }

    /// Send the current draft. A no-op when the draft is empty.
    pub async fn send(&self) {
        self.intent(SessionEvent::Send).await;
    }

    /// Set the local display name.
    pub async fn set_user_id(&self, user_id: impl Into<String>) {
        self.intent(SessionEvent::SetUserId { user_id: user_id.into() }).await;
    }

    /// Replace the pending draft text.
    pub async fn draft_change(&self, text: impl Into<String>) {
        self.intent(SessionEvent::DraftChange { text: text.into() }).await;
    }

    async fn intent(&self, event: SessionEvent) {
        if self.intents.send(event).await.is_err() {
            tracing::warn!("session actor gone; intent dropped");
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.abort_handle.abort();
    }
}

/// Actor loop: apply events to the session, execute actions, publish.
async fn run_session(
    mut session: Session,
    mut transport: ConnectedBroker,
    mut intents: mpsc::Receiver<SessionEvent>,
    state: watch::Sender<SessionSnapshot>,
) {
    let mut draft_clear: Option<Pin<Box<Sleep>>> = None;

    loop {
        let actions = tokio::select! {
            intent = intents.recv() => match intent {
                Some(event) => session.handle(event),
                // All controller handles dropped.
                None => break,
            },
            event = transport.events.recv() => match event {
                Some(event) => session.handle(SessionEvent::Transport(event)),
                // Transport task finished; any terminal state was already
                // delivered as an event before the channel closed.
                None => break,
            },
            () = wait_for(&mut draft_clear), if draft_clear.is_some() => {
                draft_clear = None;
                session.handle(SessionEvent::DraftClearElapsed)
            },
        };

        for action in actions {
            match action {
                SessionAction::Transmit { payload } => {
                    if transport.to_broker.send(payload).await.is_err() {
                        tracing::warn!("transport gone; payload dropped");
                    }
                },
                SessionAction::ClearDraftAfter { delay } => {
                    draft_clear = Some(Box::pin(tokio::time::sleep(delay)));
                },
            }
        }

        if state.send(session.snapshot().clone()).is_err() {
            // No observers left; keep running for the transport's sake.
            tracing::debug!("no snapshot observers");
        }
    }
}

/// Await the pending draft-clear timer, or forever when there is none.
async fn wait_for(timer: &mut Option<Pin<Box<Sleep>>>) {
    match timer {
        Some(sleep) => sleep.as_mut().await,
        None => std::future::pending().await,
    }
}
