//! # Generic Actor Server
//!
//! [`ResourceActor`] is the server half of the pattern: it owns the entity
//! store and the receiving end of the request channel, and processes messages
//! one at a time until the channel closes.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashSet;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// Any number of `ResourceActor` instances can run in parallel, but each one
/// processes its own messages sequentially in a loop, so the store needs no
/// `Mutex` or `RwLock`. Two concurrent writes to the same record serialize in
/// arrival order; a `List` taken between messages is a consistent snapshot
/// with no partial-write visibility.
///
/// # Store & Identity
/// The store is an insertion-ordered `Vec<T>`: `List` returns records in the
/// order they were admitted. Alongside it, the actor keeps the set of every id
/// it has ever issued or accepted. Deleting a record retires its id rather
/// than freeing it, so:
///
/// - `Create` can never hand out an id that collided with a historical record,
///   even across deletes;
/// - `Insert` (the restore path, where the caller supplies the full record)
///   fails with [`FrameworkError::DuplicateId`] when the record's id was ever
///   seen before.
///
/// # Usage
///
/// 1. **Create**: `ResourceActor::new(buffer)` returns the actor and its
///    [`ResourceClient`].
/// 2. **Wire**: pass the entity's dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on its own task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    issued: HashSet<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// client calls wait until the actor drains a message.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            issued: HashSet::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Returns the next id that has never been issued. Skips over ids already
    /// occupied by inserted (restored) records.
    fn fresh_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.issued.contains(&id) {
                return id;
            }
        }
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (all clients dropped).
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook, giving entities access to
    /// collaborators that were created after the actor was instantiated but
    /// before the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Booking" instead of the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.fresh_id();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_admit(&self.store) {
                                warn!(entity_type, error = %e, "on_admit rejected create");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.issued.insert(id.clone());
                            self.store.push(item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Insert { record, respond_to } => {
                    let id = record.id().clone();
                    debug!(entity_type, %id, "Insert");
                    if self.issued.contains(&id) {
                        warn!(entity_type, %id, "Duplicate id");
                        let _ = respond_to.send(Err(FrameworkError::DuplicateId(id.to_string())));
                        continue;
                    }
                    if let Err(e) = record.on_admit(&self.store) {
                        warn!(entity_type, %id, error = %e, "on_admit rejected insert");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.issued.insert(id.clone());
                    self.store.push(record);
                    info!(entity_type, %id, size = self.store.len(), "Inserted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|i| self.store[i].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(i) = self.position(&id) {
                        let item = &mut self.store[i];
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(i) = self.position(&id) {
                        if let Err(e) = self.store[i].on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        // The id stays in `issued`: deleted ids are never reused.
                        self.store.remove(i);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(i) = self.position(&id) {
                        let result = self.store[i]
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
