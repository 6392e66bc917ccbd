use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a draft destination.
///
/// Ids are generated by the caller *before* a command is dispatched, never
/// inside the replay fold. Minting ids during replay would fabricate fresh
/// ids on every recomputation and break referential stability between
/// destinations and their todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub Uuid);

/// Identifier for a draft todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub Uuid);

impl From<Uuid> for DestinationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<Uuid> for TodoId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One user-initiated mutation of an itinerary draft.
///
/// Commands are immutable once recorded. The draft's collections are always
/// derived by folding the command log over the empty state, so a command
/// carries everything needed to replay it deterministically, including any
/// entity id it introduces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Add a destination with an empty name.
    AddDestination { id: DestinationId },
    /// Rename a destination. No-op if the id does not match any destination.
    RenameDestination { id: DestinationId, name: String },
    /// Remove a destination. Todos pointing at it are left in place.
    DeleteDestination { id: DestinationId },
    /// Add a todo item under a destination. The destination is not validated.
    AddTodo {
        id: TodoId,
        destination_id: DestinationId,
        text: String,
    },
    /// Remove a todo item. No-op if the id does not match any todo.
    DeleteTodo { id: TodoId },
}

impl Command {
    /// Get the command name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddDestination { .. } => "add_destination",
            Command::RenameDestination { .. } => "rename_destination",
            Command::DeleteDestination { .. } => "delete_destination",
            Command::AddTodo { .. } => "add_todo",
            Command::DeleteTodo { .. } => "delete_todo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_round_trip_through_json() {
        let command = Command::AddTodo {
            id: TodoId(Uuid::new_v4()),
            destination_id: DestinationId(Uuid::new_v4()),
            text: "Visit museum".to_string(),
        };

        let json = serde_json::to_string(&command).unwrap();
        let parsed: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(command, parsed);
    }

    #[test]
    fn command_tag_uses_snake_case() {
        let command = Command::AddDestination {
            id: DestinationId(Uuid::new_v4()),
        };

        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["type"], "add_destination");
    }
}
