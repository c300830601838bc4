use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks, params, actions and queries)
// =============================================================================

/// Trait that any record must implement to be served by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Ordered so listings come back in id order.
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Update: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Query: Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the store-assigned id and the params.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, update: Self::Update) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> {
        Ok(())
    }

    /// Handle a domain-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, query: &Self::Query) -> bool;
}

/// Failures of the actor layer itself, independent of any domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(%id, "Processing get request");
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(?query, count = items.len(), "Processed list request");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, update));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(items = self.store.len(), "ResourceActor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params((self.next_id_fn)(), params)
            .map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        let id = item.id().clone();
        self.store.insert(id.clone(), item);
        info!(%id, "Item created");
        Ok(id)
    }

    fn handle_update(&mut self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        // Hooks run on a copy so a rejected update leaves the stored item intact.
        let mut updated = item.clone();
        if let Err(e) = updated.on_update(update) {
            warn!(%id, error = %e, "Update rejected");
            return Err(FrameworkError::Rejected(e));
        }
        *item = updated.clone();
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete().map_err(FrameworkError::Rejected)?;
        self.store.remove(&id);
        info!(%id, "Item deleted");
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self, query: T::Query) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { query, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, update, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
        pinned: bool,
    }

    #[derive(Debug)]
    enum TagAction {
        Pin,
    }

    #[derive(Debug)]
    enum TagQuery {
        All,
        Pinned,
    }

    impl Entity for Tag {
        type Id = u64;
        type CreateParams = String;
        type Update = String;
        type Action = TagAction;
        type ActionResult = bool;
        type Query = TagQuery;

        fn id(&self) -> &u64 {
            &self.id
        }

        fn from_create_params(id: u64, label: String) -> Result<Self, String> {
            Ok(Self { id, label, pinned: false })
        }

        fn on_update(&mut self, label: String) -> Result<(), String> {
            self.pinned = false;
            if label.is_empty() {
                return Err("label required".to_string());
            }
            self.label = label;
            Ok(())
        }

        fn handle_action(&mut self, action: TagAction) -> Result<bool, String> {
            match action {
                TagAction::Pin => {
                    let changed = !self.pinned;
                    self.pinned = true;
                    Ok(changed)
                }
            }
        }

        fn matches(&self, query: &TagQuery) -> bool {
            match query {
                TagQuery::All => true,
                TagQuery::Pinned => self.pinned,
            }
        }
    }

    fn start() -> ResourceClient<Tag> {
        let counter = Arc::new(AtomicU64::new(1));
        let (actor, client) =
            ResourceActor::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = start();
        let id = client.create("rust".into()).await.unwrap();

        assert!(client.perform_action(id, TagAction::Pin).await.unwrap());
        assert!(!client.perform_action(id, TagAction::Pin).await.unwrap());

        let tag = client.get(id).await.unwrap().unwrap();
        assert!(tag.pinned);
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_item_untouched() {
        let client = start();
        let id = client.create("rust".into()).await.unwrap();
        client.perform_action(id, TagAction::Pin).await.unwrap();

        let result = client.update(id, String::new()).await;
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));

        let tag = client.get(id).await.unwrap().unwrap();
        assert_eq!(tag.label, "rust");
        assert!(tag.pinned);
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_filtered() {
        let client = start();
        let a = client.create("a".into()).await.unwrap();
        let b = client.create("b".into()).await.unwrap();
        let c = client.create("c".into()).await.unwrap();
        client.perform_action(c, TagAction::Pin).await.unwrap();
        client.perform_action(a, TagAction::Pin).await.unwrap();

        let all: Vec<u64> =
            client.list(TagQuery::All).await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(all, vec![a, b, c]);

        let pinned: Vec<u64> =
            client.list(TagQuery::Pinned).await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(pinned, vec![a, c]);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let client = start();
        let first = client.create("a".into()).await.unwrap();
        client.delete(first).await.unwrap();
        assert_eq!(client.delete(first).await, Err(FrameworkError::NotFound(first.to_string())));

        let second = client.create("b".into()).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (actor, client) = ResourceActor::<Tag>::new(1, || 1);
        drop(actor);
        assert_eq!(client.list(TagQuery::All).await, Err(FrameworkError::ActorClosed));
    }
}
