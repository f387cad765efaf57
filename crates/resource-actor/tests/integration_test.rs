use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    label: String,
    closed: bool,
}

#[derive(Debug)]
struct TicketCreate {
    label: String,
}

#[derive(Debug)]
struct TicketUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum TicketError {
    #[error("label already taken")]
    LabelTaken,
    #[error("already closed")]
    AlreadyClosed,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = ();
    type Context = ();
    type Error = TicketError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            closed: false,
        })
    }

    fn on_admit(&self, peers: &[Self]) -> Result<(), Self::Error> {
        if peers.iter().any(|t| t.label == self.label) {
            return Err(TicketError::LabelTaken);
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {
            TicketAction::Close => {
                if self.closed {
                    return Err(TicketError::AlreadyClosed);
                }
                self.closed = true;
                Ok(())
            }
        }
    }
}

fn entity_err(e: FrameworkError) -> TicketError {
    match e {
        FrameworkError::EntityError(inner) => *inner.downcast::<TicketError>().unwrap(),
        other => panic!("expected entity error, got {other}"),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id = client
        .create(TicketCreate {
            label: "leaky-roof".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Action
    client.perform_action(id, TicketAction::Close).await.unwrap();
    let ticket = client.get(id).await.unwrap().unwrap();
    assert!(ticket.closed);

    // 3. Action against settled state fails, state unchanged
    let err = client
        .perform_action(id, TicketAction::Close)
        .await
        .unwrap_err();
    assert_eq!(entity_err(err), TicketError::AlreadyClosed);
    assert!(client.get(id).await.unwrap().unwrap().closed);

    // 4. Update
    let updated = client
        .update(
            id,
            TicketUpdate {
                label: Some("roof-fixed".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "roof-fixed");

    // 5. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["a", "b", "c"] {
        client
            .create(TicketCreate {
                label: label.into(),
            })
            .await
            .unwrap();
    }

    let all = client.list().await.unwrap();
    let labels: Vec<_> = all.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_deleted_ids_are_never_reissued() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let first = client
        .create(TicketCreate { label: "one".into() })
        .await
        .unwrap();
    client.delete(first).await.unwrap();

    // A fresh create must not reuse the retired id.
    let second = client
        .create(TicketCreate { label: "two".into() })
        .await
        .unwrap();
    assert_ne!(first, second);

    // Inserting a record under the retired id is rejected.
    let revived = Ticket {
        id: first,
        label: "ghost".into(),
        closed: false,
    };
    let err = client.insert(revived).await.unwrap_err();
    assert!(matches!(err, FrameworkError::DuplicateId(_)));
}

#[tokio::test]
async fn test_insert_skips_counter_collisions() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // Restore a record under id 1 before anything was created.
    let restored = Ticket {
        id: 1,
        label: "restored".into(),
        closed: false,
    };
    client.insert(restored).await.unwrap();

    // The generator must step over the occupied id.
    let id = client
        .create(TicketCreate {
            label: "fresh".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 2);
}

#[tokio::test]
async fn test_on_admit_rejects_conflicts() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(TicketCreate {
            label: "unique".into(),
        })
        .await
        .unwrap();

    let err = client
        .create(TicketCreate {
            label: "unique".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(entity_err(err), TicketError::LabelTaken);

    // The rejected record must not have been admitted.
    assert_eq!(client.list().await.unwrap().len(), 1);
}
