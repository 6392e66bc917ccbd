//! In-memory itinerary draft editing with unlimited linear undo/redo.
//!
//! A draft is never mutated in place. Every user action is recorded as a
//! [`Command`] in an append-only history, and the visible collections
//! (destinations and todos) are recomputed by replaying that history over the
//! empty state. Undo pops the last command onto a redo stack and replays the
//! shortened history; redo moves it back. Because state is a pure function of
//! the history, no per-command inverse logic exists, and a serialized history
//! is a complete durable representation of a draft.
//!
//! The store itself never fails: commands referencing unknown entities are
//! silent no-ops at their replay step, and undo/redo on empty logs leave the
//! draft unchanged. Callers use [`ItineraryDraft::can_undo`] and
//! [`ItineraryDraft::can_redo`] to gate their controls.

mod command;

pub use command::{Command, DestinationId, TodoId};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::ser::SerializeStruct;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A destination being planned in a draft.
///
/// Identity is the id; the name starts empty and is mutable via
/// [`Command::RenameDestination`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
}

/// A todo item owned by exactly one destination via `destination_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub destination_id: DestinationId,
}

/// An editing session over one itinerary draft.
///
/// The collections are derived from `history` on every mutation; the fields
/// are private so callers cannot put them out of sync with the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryDraft {
    destinations: Vec<Destination>,
    todos: Vec<TodoItem>,
    history: Vec<Command>,
    redo_stack: Vec<Command>,
}

// Snapshots carry `can_undo`/`can_redo` so clients can gate their controls
// without inspecting the logs.
impl Serialize for ItineraryDraft {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ItineraryDraft", 6)?;
        state.serialize_field("destinations", &self.destinations)?;
        state.serialize_field("todos", &self.todos)?;
        state.serialize_field("history", &self.history)?;
        state.serialize_field("redo_stack", &self.redo_stack)?;
        state.serialize_field("can_undo", &self.can_undo())?;
        state.serialize_field("can_redo", &self.can_redo())?;
        state.end()
    }
}

impl ItineraryDraft {
    /// Create an empty draft: no destinations, no todos, empty logs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a draft from a previously recorded command history.
    ///
    /// Replaying the same history always yields the same collections, so this
    /// is the reload path for callers that persisted a draft by serializing
    /// its history.
    pub fn from_history(history: Vec<Command>) -> Self {
        let (destinations, todos) = replay(&history);
        Self {
            destinations,
            todos,
            history,
            redo_stack: Vec::new(),
        }
    }

    /// Record a command and derive the new state.
    ///
    /// Appends to the history, discards any redoable commands (standard
    /// linear undo semantics), and replays the full history from empty.
    pub fn dispatch(&mut self, command: Command) {
        self.history.push(command);
        self.redo_stack.clear();
        self.recompute();
    }

    /// Revert the most recent command. No-op when the history is empty.
    pub fn undo(&mut self) {
        let Some(last) = self.history.pop() else {
            return;
        };
        self.redo_stack.push(last);
        self.recompute();
    }

    /// Re-apply the most recently undone command. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) {
        let Some(next) = self.redo_stack.pop() else {
            return;
        };
        self.history.push(next);
        self.recompute();
    }

    pub fn add_destination(&mut self, id: DestinationId) {
        self.dispatch(Command::AddDestination { id });
    }

    pub fn rename_destination(&mut self, id: DestinationId, name: impl Into<String>) {
        self.dispatch(Command::RenameDestination {
            id,
            name: name.into(),
        });
    }

    pub fn delete_destination(&mut self, id: DestinationId) {
        self.dispatch(Command::DeleteDestination { id });
    }

    pub fn add_todo(
        &mut self,
        id: TodoId,
        destination_id: DestinationId,
        text: impl Into<String>,
    ) {
        self.dispatch(Command::AddTodo {
            id,
            destination_id,
            text: text.into(),
        });
    }

    pub fn delete_todo(&mut self, id: TodoId) {
        self.dispatch(Command::DeleteTodo { id });
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn history(&self) -> &[Command] {
        &self.history
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Todos belonging to one destination.
    ///
    /// Always computed from the current todos collection, never stored, so it
    /// cannot drift from the log-derived state.
    pub fn todos_for(&self, destination_id: DestinationId) -> Vec<TodoItem> {
        self.todos
            .iter()
            .filter(|todo| todo.destination_id == destination_id)
            .cloned()
            .collect()
    }

    fn recompute(&mut self) {
        let (destinations, todos) = replay(&self.history);
        self.destinations = destinations;
        self.todos = todos;
    }
}

/// Fold a command history over the empty state.
fn replay(history: &[Command]) -> (Vec<Destination>, Vec<TodoItem>) {
    let mut destinations = Vec::new();
    let mut todos = Vec::new();
    for command in history {
        apply(command, &mut destinations, &mut todos);
    }
    (destinations, todos)
}

/// One step of the fold.
///
/// Duplicate ids and dangling `destination_id` references are accepted as-is:
/// the caller is the only command producer, and the fold stays total rather
/// than validating on every step. Deleting a destination leaves its todos in
/// place; they remain reachable by todo id only.
fn apply(command: &Command, destinations: &mut Vec<Destination>, todos: &mut Vec<TodoItem>) {
    match command {
        Command::AddDestination { id } => {
            destinations.push(Destination {
                id: *id,
                name: String::new(),
            });
        }
        Command::RenameDestination { id, name } => {
            for destination in destinations.iter_mut() {
                if destination.id == *id {
                    destination.name = name.clone();
                }
            }
        }
        Command::DeleteDestination { id } => {
            destinations.retain(|destination| destination.id != *id);
        }
        Command::AddTodo {
            id,
            destination_id,
            text,
        } => {
            todos.push(TodoItem {
                id: *id,
                text: text.clone(),
                destination_id: *destination_id,
            });
        }
        Command::DeleteTodo { id } => {
            todos.retain(|todo| todo.id != *id);
        }
    }
}

/// Error type for draft session lookups.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Draft session not found")]
    NotFound,
}

/// Registry of active draft sessions, keyed by session id.
///
/// The draft store is single-writer by design; the registry serializes all
/// dispatches from concurrent API handlers through one mutex. Sessions are
/// in-memory only and are discarded when closed or when the server stops.
/// A caller that wants durability serializes the draft's history and seeds a
/// new session with it later.
#[derive(Debug, Clone, Default)]
pub struct DraftRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, ItineraryDraft>>>,
}

impl DraftRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session, optionally seeded from a recorded history.
    pub fn create(&self, history: Vec<Command>) -> Uuid {
        let id = Uuid::new_v4();
        let draft = ItineraryDraft::from_history(history);
        let mut sessions = self.sessions.lock().expect("draft registry lock poisoned");
        sessions.insert(id, draft);
        tracing::debug!("Opened draft session {}", id);
        id
    }

    /// Current state of a session.
    pub fn snapshot(&self, id: Uuid) -> Result<ItineraryDraft, DraftError> {
        let sessions = self.sessions.lock().expect("draft registry lock poisoned");
        sessions.get(&id).cloned().ok_or(DraftError::NotFound)
    }

    /// Dispatch a command into a session and return the new state.
    pub fn dispatch(&self, id: Uuid, command: Command) -> Result<ItineraryDraft, DraftError> {
        let mut sessions = self.sessions.lock().expect("draft registry lock poisoned");
        let draft = sessions.get_mut(&id).ok_or(DraftError::NotFound)?;
        tracing::debug!("Draft session {}: {}", id, command.name());
        draft.dispatch(command);
        Ok(draft.clone())
    }

    pub fn undo(&self, id: Uuid) -> Result<ItineraryDraft, DraftError> {
        let mut sessions = self.sessions.lock().expect("draft registry lock poisoned");
        let draft = sessions.get_mut(&id).ok_or(DraftError::NotFound)?;
        draft.undo();
        Ok(draft.clone())
    }

    pub fn redo(&self, id: Uuid) -> Result<ItineraryDraft, DraftError> {
        let mut sessions = self.sessions.lock().expect("draft registry lock poisoned");
        let draft = sessions.get_mut(&id).ok_or(DraftError::NotFound)?;
        draft.redo();
        Ok(draft.clone())
    }

    /// Derived view of one destination's todos in a session.
    pub fn todos_for(
        &self,
        id: Uuid,
        destination_id: DestinationId,
    ) -> Result<Vec<TodoItem>, DraftError> {
        let sessions = self.sessions.lock().expect("draft registry lock poisoned");
        let draft = sessions.get(&id).ok_or(DraftError::NotFound)?;
        Ok(draft.todos_for(destination_id))
    }

    /// Discard a session and its state.
    pub fn close(&self, id: Uuid) -> Result<(), DraftError> {
        let mut sessions = self.sessions.lock().expect("draft registry lock poisoned");
        if sessions.remove(&id).is_some() {
            tracing::debug!("Closed draft session {}", id);
            Ok(())
        } else {
            Err(DraftError::NotFound)
        }
    }
}
