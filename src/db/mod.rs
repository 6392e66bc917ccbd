mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::*;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "wayfarer")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("wayfarer.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    // ============================================================
    // Itinerary operations
    // ============================================================

    pub fn get_all_itineraries(&self) -> Result<Vec<Itinerary>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, description, people, created_at, updated_at
             FROM itineraries ORDER BY name",
        )?;

        let itineraries = stmt
            .query_map([], |row| {
                Ok(Itinerary {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    name: row.get(1)?,
                    description: row.get(2)?,
                    people: row.get(3)?,
                    created_at: parse_datetime(row.get::<_, String>(4)?),
                    updated_at: parse_datetime(row.get::<_, String>(5)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(itineraries)
    }

    pub fn get_itinerary(&self, id: Uuid) -> Result<Option<Itinerary>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, description, people, created_at, updated_at
             FROM itineraries WHERE id = ?",
        )?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Itinerary {
                id: parse_uuid(row.get::<_, String>(0)?),
                name: row.get(1)?,
                description: row.get(2)?,
                people: row.get(3)?,
                created_at: parse_datetime(row.get::<_, String>(4)?),
                updated_at: parse_datetime(row.get::<_, String>(5)?),
            }))
        } else {
            Ok(None)
        }
    }

    pub fn get_itinerary_with_destinations(
        &self,
        id: Uuid,
    ) -> Result<Option<ItineraryWithDestinations>> {
        let itinerary = match self.get_itinerary(id)? {
            Some(i) => i,
            None => return Ok(None),
        };

        let destinations = self.get_destinations_by_itinerary(id)?;

        Ok(Some(ItineraryWithDestinations {
            itinerary,
            destinations,
        }))
    }

    pub fn create_itinerary(&self, input: CreateItineraryInput) -> Result<Itinerary> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();
        let people = input.people.unwrap_or(1);

        conn.execute(
            "INSERT INTO itineraries (id, name, description, people, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                &input.name,
                &input.description,
                people,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ),
        )?;

        Ok(Itinerary {
            id,
            name: input.name,
            description: input.description,
            people,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update_itinerary(
        &self,
        id: Uuid,
        input: UpdateItineraryInput,
    ) -> Result<Option<Itinerary>> {
        let Some(existing) = self.get_itinerary(id)? else {
            return Ok(None);
        };

        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();
        let name = input.name.unwrap_or(existing.name);
        let description = input.description.or(existing.description);
        let people = input.people.unwrap_or(existing.people);

        conn.execute(
            "UPDATE itineraries SET name = ?, description = ?, people = ?, updated_at = ? WHERE id = ?",
            (&name, &description, people, now.to_rfc3339(), id.to_string()),
        )?;

        Ok(Some(Itinerary {
            id,
            name,
            description,
            people,
            created_at: existing.created_at,
            updated_at: now,
        }))
    }

    pub fn delete_itinerary(&self, id: Uuid) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM itineraries WHERE id = ?", [id.to_string()])?;
        Ok(rows > 0)
    }

    // ============================================================
    // Destination operations
    // ============================================================

    pub fn get_destinations_by_itinerary(&self, itinerary_id: Uuid) -> Result<Vec<Destination>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, itinerary_id, name, location, arrival_date, departure_date, status, created_at
             FROM destinations WHERE itinerary_id = ? ORDER BY arrival_date, name",
        )?;

        let destinations = stmt
            .query_map([itinerary_id.to_string()], |row| {
                Ok(Destination {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    itinerary_id: parse_uuid(row.get::<_, String>(1)?),
                    name: row.get(2)?,
                    location: row.get(3)?,
                    arrival_date: row.get(4)?,
                    departure_date: row.get(5)?,
                    status: DestinationStatus::from_str(&row.get::<_, String>(6)?)
                        .unwrap_or(DestinationStatus::Draft),
                    created_at: parse_datetime(row.get::<_, String>(7)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(destinations)
    }

    pub fn get_destination(&self, id: Uuid) -> Result<Option<Destination>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, itinerary_id, name, location, arrival_date, departure_date, status, created_at
             FROM destinations WHERE id = ?",
        )?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Destination {
                id: parse_uuid(row.get::<_, String>(0)?),
                itinerary_id: parse_uuid(row.get::<_, String>(1)?),
                name: row.get(2)?,
                location: row.get(3)?,
                arrival_date: row.get(4)?,
                departure_date: row.get(5)?,
                status: DestinationStatus::from_str(&row.get::<_, String>(6)?)
                    .unwrap_or(DestinationStatus::Draft),
                created_at: parse_datetime(row.get::<_, String>(7)?),
            }))
        } else {
            Ok(None)
        }
    }

    pub fn create_destination(
        &self,
        itinerary_id: Uuid,
        input: CreateDestinationInput,
    ) -> Result<Destination> {
        // Verify itinerary exists
        self.get_itinerary(itinerary_id)?
            .ok_or_else(|| anyhow::anyhow!("Itinerary not found"))?;

        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();
        let status = input.status.unwrap_or(DestinationStatus::Draft);

        conn.execute(
            "INSERT INTO destinations (id, itinerary_id, name, location, arrival_date, departure_date, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                itinerary_id.to_string(),
                &input.name,
                &input.location,
                &input.arrival_date,
                &input.departure_date,
                status.as_str(),
                now.to_rfc3339(),
            ),
        )?;

        Ok(Destination {
            id,
            itinerary_id,
            name: input.name,
            location: input.location,
            arrival_date: input.arrival_date,
            departure_date: input.departure_date,
            status,
            created_at: now,
        })
    }

    pub fn update_destination(
        &self,
        id: Uuid,
        input: UpdateDestinationInput,
    ) -> Result<Option<Destination>> {
        let Some(existing) = self.get_destination(id)? else {
            return Ok(None);
        };

        let conn = self.conn.lock().expect("database lock poisoned");
        let name = input.name.unwrap_or(existing.name);
        let location = input.location.unwrap_or(existing.location);
        let arrival_date = input.arrival_date.unwrap_or(existing.arrival_date);
        let departure_date = input.departure_date.unwrap_or(existing.departure_date);
        let status = input.status.unwrap_or(existing.status);

        conn.execute(
            "UPDATE destinations SET name = ?, location = ?, arrival_date = ?, departure_date = ?, status = ? WHERE id = ?",
            (
                &name,
                &location,
                &arrival_date,
                &departure_date,
                status.as_str(),
                id.to_string(),
            ),
        )?;

        Ok(Some(Destination {
            id,
            itinerary_id: existing.itinerary_id,
            name,
            location,
            arrival_date,
            departure_date,
            status,
            created_at: existing.created_at,
        }))
    }

    pub fn delete_destination(&self, id: Uuid) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM destinations WHERE id = ?", [id.to_string()])?;
        Ok(rows > 0)
    }

    // ============================================================
    // Activity operations
    // ============================================================

    pub fn get_activities_by_itinerary(&self, itinerary_id: Uuid) -> Result<Vec<Activity>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, itinerary_id, destination_id, name, description, start_time, end_time, created_at
             FROM activities WHERE itinerary_id = ? ORDER BY start_time",
        )?;

        let activities = stmt
            .query_map([itinerary_id.to_string()], |row| {
                Ok(Activity {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    itinerary_id: parse_uuid(row.get::<_, String>(1)?),
                    destination_id: row.get::<_, Option<String>>(2)?.map(parse_uuid),
                    name: row.get(3)?,
                    description: row.get(4)?,
                    start_time: row.get(5)?,
                    end_time: row.get(6)?,
                    created_at: parse_datetime(row.get::<_, String>(7)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(activities)
    }

    pub fn create_activity(&self, itinerary_id: Uuid, input: CreateActivityInput) -> Result<Activity> {
        // Verify itinerary exists, and the destination when one is given
        self.get_itinerary(itinerary_id)?
            .ok_or_else(|| anyhow::anyhow!("Itinerary not found"))?;
        if let Some(destination_id) = input.destination_id {
            self.get_destination(destination_id)?
                .ok_or_else(|| anyhow::anyhow!("Destination not found"))?;
        }

        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO activities (id, itinerary_id, destination_id, name, description, start_time, end_time, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                itinerary_id.to_string(),
                input.destination_id.map(|u| u.to_string()),
                &input.name,
                &input.description,
                &input.start_time,
                &input.end_time,
                now.to_rfc3339(),
            ),
        )?;

        Ok(Activity {
            id,
            itinerary_id,
            destination_id: input.destination_id,
            name: input.name,
            description: input.description,
            start_time: input.start_time,
            end_time: input.end_time,
            created_at: now,
        })
    }

    pub fn delete_activity(&self, id: Uuid) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM activities WHERE id = ?", [id.to_string()])?;
        Ok(rows > 0)
    }

    // ============================================================
    // Booking operations
    // ============================================================

    pub fn get_flight_bookings_by_destination(
        &self,
        destination_id: Uuid,
    ) -> Result<Vec<FlightBooking>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, destination_id, airline, price, departure_time, arrival_time, created_at
             FROM flight_bookings WHERE destination_id = ? ORDER BY created_at",
        )?;

        let bookings = stmt
            .query_map([destination_id.to_string()], |row| {
                Ok(FlightBooking {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    destination_id: parse_uuid(row.get::<_, String>(1)?),
                    airline: row.get(2)?,
                    price: row.get(3)?,
                    departure_time: row.get(4)?,
                    arrival_time: row.get(5)?,
                    created_at: parse_datetime(row.get::<_, String>(6)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bookings)
    }

    pub fn create_flight_booking(
        &self,
        destination_id: Uuid,
        input: CreateFlightBookingInput,
    ) -> Result<FlightBooking> {
        // Verify destination exists
        self.get_destination(destination_id)?
            .ok_or_else(|| anyhow::anyhow!("Destination not found"))?;

        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO flight_bookings (id, destination_id, airline, price, departure_time, arrival_time, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                destination_id.to_string(),
                &input.airline,
                input.price,
                &input.departure_time,
                &input.arrival_time,
                now.to_rfc3339(),
            ),
        )?;

        Ok(FlightBooking {
            id,
            destination_id,
            airline: input.airline,
            price: input.price,
            departure_time: input.departure_time,
            arrival_time: input.arrival_time,
            created_at: now,
        })
    }

    pub fn get_hotel_bookings_by_destination(
        &self,
        destination_id: Uuid,
    ) -> Result<Vec<HotelBooking>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, destination_id, name, price, check_in, check_out, created_at
             FROM hotel_bookings WHERE destination_id = ? ORDER BY created_at",
        )?;

        let bookings = stmt
            .query_map([destination_id.to_string()], |row| {
                Ok(HotelBooking {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    destination_id: parse_uuid(row.get::<_, String>(1)?),
                    name: row.get(2)?,
                    price: row.get(3)?,
                    check_in: row.get(4)?,
                    check_out: row.get(5)?,
                    created_at: parse_datetime(row.get::<_, String>(6)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bookings)
    }

    pub fn create_hotel_booking(
        &self,
        destination_id: Uuid,
        input: CreateHotelBookingInput,
    ) -> Result<HotelBooking> {
        // Verify destination exists
        self.get_destination(destination_id)?
            .ok_or_else(|| anyhow::anyhow!("Destination not found"))?;

        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO hotel_bookings (id, destination_id, name, price, check_in, check_out, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                destination_id.to_string(),
                &input.name,
                input.price,
                &input.check_in,
                &input.check_out,
                now.to_rfc3339(),
            ),
        )?;

        Ok(HotelBooking {
            id,
            destination_id,
            name: input.name,
            price: input.price,
            check_in: input.check_in,
            check_out: input.check_out,
            created_at: now,
        })
    }

    // ============================================================
    // Comment operations
    // ============================================================

    pub fn get_comments_by_itinerary(&self, itinerary_id: Uuid) -> Result<Vec<Comment>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, itinerary_id, content, created_at
             FROM comments WHERE itinerary_id = ? ORDER BY created_at",
        )?;

        let comments = stmt
            .query_map([itinerary_id.to_string()], |row| {
                Ok(Comment {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    itinerary_id: parse_uuid(row.get::<_, String>(1)?),
                    content: row.get(2)?,
                    created_at: parse_datetime(row.get::<_, String>(3)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comments)
    }

    pub fn create_comment(&self, itinerary_id: Uuid, input: CreateCommentInput) -> Result<Comment> {
        // Verify itinerary exists
        self.get_itinerary(itinerary_id)?
            .ok_or_else(|| anyhow::anyhow!("Itinerary not found"))?;

        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO comments (id, itinerary_id, content, created_at)
             VALUES (?, ?, ?, ?)",
            (
                id.to_string(),
                itinerary_id.to_string(),
                &input.content,
                now.to_rfc3339(),
            ),
        )?;

        Ok(Comment {
            id,
            itinerary_id,
            content: input.content,
            created_at: now,
        })
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn parse_uuid(s: String) -> Uuid {
    Uuid::parse_str(&s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
