use speculate2::speculate;
use uuid::Uuid;
use wayfarer::planner::{Command, DestinationId, DraftRegistry, ItineraryDraft, TodoId};

fn destination_id() -> DestinationId {
    DestinationId(Uuid::new_v4())
}

fn todo_id() -> TodoId {
    TodoId(Uuid::new_v4())
}

speculate! {
    describe "dispatch" {
        before {
            let mut draft = ItineraryDraft::new();
        }

        it "adds a destination with an empty name" {
            let d1 = destination_id();
            draft.add_destination(d1);

            assert_eq!(draft.destinations().len(), 1);
            assert_eq!(draft.destinations()[0].id, d1);
            assert_eq!(draft.destinations()[0].name, "");
        }

        it "renames a matching destination" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.rename_destination(d1, "Paris");

            assert_eq!(draft.destinations()[0].name, "Paris");
        }

        it "rename of an unknown destination is a silent no-op" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.rename_destination(destination_id(), "Nowhere");

            assert_eq!(draft.destinations().len(), 1);
            assert_eq!(draft.destinations()[0].name, "");
        }

        it "adds todos with the caller-supplied id" {
            let d1 = destination_id();
            let t1 = todo_id();
            draft.add_destination(d1);
            draft.add_todo(t1, d1, "Visit museum");

            assert_eq!(draft.todos().len(), 1);
            assert_eq!(draft.todos()[0].id, t1);
            assert_eq!(draft.todos()[0].destination_id, d1);
            assert_eq!(draft.todos()[0].text, "Visit museum");
        }

        it "deleting a destination leaves its todos in place" {
            let d1 = destination_id();
            let t1 = todo_id();
            draft.add_destination(d1);
            draft.add_todo(t1, d1, "Visit museum");
            draft.delete_destination(d1);

            assert!(draft.destinations().is_empty());
            let orphans = draft.todos_for(d1);
            assert_eq!(orphans.len(), 1);
            assert_eq!(orphans[0].id, t1);
            assert_eq!(orphans[0].text, "Visit museum");
        }

        it "delete of an unknown todo is a silent no-op" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.add_todo(todo_id(), d1, "Try local cuisine");
            draft.delete_todo(todo_id());

            assert_eq!(draft.todos().len(), 1);
        }

        it "accepts a dangling todo destination reference" {
            let elsewhere = destination_id();
            draft.add_todo(todo_id(), elsewhere, "Book ferry");

            assert!(draft.destinations().is_empty());
            assert_eq!(draft.todos_for(elsewhere).len(), 1);
        }

        it "keeps duplicate destination ids as two entries" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.add_destination(d1);

            assert_eq!(draft.destinations().len(), 2);
        }

        it "keeps caller-unique ids unique through arbitrary edits" {
            let ids: Vec<_> = (0..4).map(|_| destination_id()).collect();
            for id in &ids {
                draft.add_destination(*id);
            }
            draft.rename_destination(ids[1], "Lisbon");
            draft.delete_destination(ids[0]);
            draft.undo();

            let mut seen = std::collections::HashSet::new();
            for destination in draft.destinations() {
                assert!(seen.insert(destination.id));
            }
        }

        it "clears the redo stack on every new command" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.undo();
            assert!(draft.can_redo());

            draft.add_destination(destination_id());
            assert!(!draft.can_redo());
        }
    }

    describe "undo and redo" {
        before {
            let mut draft = ItineraryDraft::new();
        }

        it "undoing a rename restores the previous name and redo reapplies it" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.rename_destination(d1, "Paris");
            assert_eq!(draft.destinations()[0].name, "Paris");

            draft.undo();
            assert_eq!(draft.destinations()[0].name, "");

            draft.redo();
            assert_eq!(draft.destinations()[0].name, "Paris");
        }

        it "undo with an empty history is a no-op" {
            draft.undo();

            assert!(draft.destinations().is_empty());
            assert!(draft.history().is_empty());
            assert!(!draft.can_redo());
        }

        it "redo with an empty stack is a no-op" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.redo();

            assert_eq!(draft.destinations().len(), 1);
            assert_eq!(draft.history().len(), 1);
        }

        it "dispatching after undo discards the redo stack" {
            let d1 = destination_id();
            let d2 = destination_id();
            draft.add_destination(d1);
            draft.undo();
            draft.add_destination(d2);

            assert_eq!(draft.destinations().len(), 1);
            assert_eq!(draft.destinations()[0].id, d2);

            draft.redo();
            assert_eq!(draft.destinations().len(), 1);
            assert_eq!(draft.destinations()[0].id, d2);
        }

        it "undo then redo is identity for every command type" {
            let d1 = destination_id();
            let t1 = todo_id();
            draft.add_destination(d1);
            draft.rename_destination(d1, "Kyoto");
            draft.add_todo(t1, d1, "See the temples");

            let commands = [
                Command::AddDestination { id: destination_id() },
                Command::RenameDestination { id: d1, name: "Osaka".to_string() },
                Command::DeleteDestination { id: d1 },
                Command::AddTodo {
                    id: todo_id(),
                    destination_id: d1,
                    text: "Ride the shinkansen".to_string(),
                },
                Command::DeleteTodo { id: t1 },
            ];

            for command in commands {
                let before_destinations = draft.destinations().to_vec();
                let before_todos = draft.todos().to_vec();

                draft.dispatch(command);
                let after_destinations = draft.destinations().to_vec();
                let after_todos = draft.todos().to_vec();

                draft.undo();
                assert_eq!(draft.destinations(), &before_destinations[..]);
                assert_eq!(draft.todos(), &before_todos[..]);

                draft.redo();
                assert_eq!(draft.destinations(), &after_destinations[..]);
                assert_eq!(draft.todos(), &after_todos[..]);
            }
        }

        it "a full undo chain walks back to the empty draft" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.rename_destination(d1, "Rome");
            draft.add_todo(todo_id(), d1, "Throw a coin in the fountain");

            while draft.can_undo() {
                draft.undo();
            }

            assert!(draft.destinations().is_empty());
            assert!(draft.todos().is_empty());
            assert_eq!(draft.redo_stack().len(), 3);

            while draft.can_redo() {
                draft.redo();
            }
            assert_eq!(draft.destinations()[0].name, "Rome");
            assert_eq!(draft.todos().len(), 1);
        }
    }

    describe "replay determinism" {
        it "replaying the same history twice yields identical state" {
            let d1 = destination_id();
            let history = vec![
                Command::AddDestination { id: d1 },
                Command::RenameDestination { id: d1, name: "Paris".to_string() },
                Command::AddTodo {
                    id: todo_id(),
                    destination_id: d1,
                    text: "Climb the tower".to_string(),
                },
            ];

            let first = ItineraryDraft::from_history(history.clone());
            let second = ItineraryDraft::from_history(history);

            assert_eq!(first, second);
        }

        it "from_history equals dispatching the same commands in order" {
            let d1 = destination_id();
            let t1 = todo_id();
            let history = vec![
                Command::AddDestination { id: d1 },
                Command::AddTodo {
                    id: t1,
                    destination_id: d1,
                    text: "Visit museum".to_string(),
                },
                Command::DeleteTodo { id: t1 },
            ];

            let mut dispatched = ItineraryDraft::new();
            for command in history.clone() {
                dispatched.dispatch(command);
            }

            assert_eq!(ItineraryDraft::from_history(history), dispatched);
        }

        it "todo ids stay linked to their destination across replays" {
            let d1 = destination_id();
            let t1 = todo_id();
            let mut draft = ItineraryDraft::new();
            draft.add_destination(d1);
            draft.add_todo(t1, d1, "Surf lesson");

            // Force several replays
            draft.undo();
            draft.redo();
            draft.undo();
            draft.redo();

            assert_eq!(draft.todos_for(d1)[0].id, t1);
        }
    }

    describe "todos_for" {
        before {
            let mut draft = ItineraryDraft::new();
        }

        it "returns only todos for the given destination" {
            let d1 = destination_id();
            let d2 = destination_id();
            draft.add_destination(d1);
            draft.add_destination(d2);
            draft.add_todo(todo_id(), d1, "Old town walk");
            draft.add_todo(todo_id(), d2, "Harbor cruise");
            draft.add_todo(todo_id(), d1, "Market breakfast");

            let for_d1 = draft.todos_for(d1);
            assert_eq!(for_d1.len(), 2);
            assert!(for_d1.iter().all(|todo| todo.destination_id == d1));
        }

        it "matches a manual filter of the todos collection" {
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.add_todo(todo_id(), d1, "A");
            draft.add_todo(todo_id(), destination_id(), "B");

            let expected: Vec<_> = draft
                .todos()
                .iter()
                .filter(|todo| todo.destination_id == d1)
                .cloned()
                .collect();

            assert_eq!(draft.todos_for(d1), expected);
        }
    }

    describe "serialized snapshots" {
        it "include the undo and redo flags alongside the logs" {
            let mut draft = ItineraryDraft::new();
            let d1 = destination_id();
            draft.add_destination(d1);
            draft.rename_destination(d1, "Paris");
            draft.undo();

            let snapshot = serde_json::to_value(&draft).expect("Serialization failed");

            assert_eq!(snapshot["history"].as_array().unwrap().len(), 1);
            assert_eq!(snapshot["redo_stack"].as_array().unwrap().len(), 1);
            assert_eq!(snapshot["can_undo"], true);
            assert_eq!(snapshot["can_redo"], true);
        }

        it "report both flags false for an empty draft" {
            let snapshot = serde_json::to_value(ItineraryDraft::new())
                .expect("Serialization failed");

            assert_eq!(snapshot["can_undo"], false);
            assert_eq!(snapshot["can_redo"], false);
        }
    }

    describe "draft registry" {
        before {
            let registry = DraftRegistry::new();
        }

        it "creates sessions that start empty" {
            let id = registry.create(Vec::new());
            let snapshot = registry.snapshot(id).expect("Session should exist");

            assert!(snapshot.destinations().is_empty());
            assert!(!snapshot.can_undo());
        }

        it "seeds a session from a recorded history" {
            let d1 = destination_id();
            let id = registry.create(vec![
                Command::AddDestination { id: d1 },
                Command::RenameDestination { id: d1, name: "Berlin".to_string() },
            ]);

            let snapshot = registry.snapshot(id).expect("Session should exist");
            assert_eq!(snapshot.destinations()[0].name, "Berlin");
            assert!(snapshot.can_undo());
        }

        it "dispatches commands and returns the new state" {
            let id = registry.create(Vec::new());
            let d1 = destination_id();

            let snapshot = registry
                .dispatch(id, Command::AddDestination { id: d1 })
                .expect("Session should exist");

            assert_eq!(snapshot.destinations().len(), 1);
        }

        it "undo and redo work through the registry" {
            let id = registry.create(Vec::new());
            let d1 = destination_id();
            registry.dispatch(id, Command::AddDestination { id: d1 }).unwrap();

            let undone = registry.undo(id).expect("Session should exist");
            assert!(undone.destinations().is_empty());

            let redone = registry.redo(id).expect("Session should exist");
            assert_eq!(redone.destinations().len(), 1);
        }

        it "returns NotFound for unknown sessions" {
            assert!(registry.snapshot(Uuid::new_v4()).is_err());
            assert!(registry.undo(Uuid::new_v4()).is_err());
        }

        it "close discards the session" {
            let id = registry.create(Vec::new());
            registry.close(id).expect("Session should exist");

            assert!(registry.snapshot(id).is_err());
            assert!(registry.close(id).is_err());
        }
    }
}
