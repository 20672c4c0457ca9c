//! One turn: route the conversation, then run the chosen responder.

use std::sync::Arc;

use tracing::debug;

use crate::responder::{GeneralResponder, TimeResponder};
use crate::router::{Intent, IntentRouter};
use crate::tools::Clock;
use crate::{AiClient, Message};

pub struct Dispatcher {
    router: IntentRouter,
    time: TimeResponder,
    general: GeneralResponder,
}

impl Dispatcher {
    /// A dispatcher with the default keywords and the system clock.
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self {
            router: IntentRouter::default(),
            time: TimeResponder::default(),
            general: GeneralResponder::new(client),
        }
    }

    pub fn with_router(mut self, router: IntentRouter) -> Self {
        self.router = router;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.time = TimeResponder::new(clock);
        self
    }

    /// Run a turn and return the conversation with the reply appended.
    ///
    /// On `Intent::Terminate` the conversation comes back unchanged.
    pub async fn dispatch(&self, mut messages: Vec<Message>) -> Vec<Message> {
        let intent = self.router.classify(&messages);
        debug!(?intent, "routed turn");

        let reply = match intent {
            Intent::Time => self.time.respond(),
            Intent::General => self.general.respond(&messages).await,
            Intent::Terminate => return messages,
        };
        messages.push(reply);
        messages
    }
}
