//! Mock flight and hotel search.
//!
//! Stand-ins for real supplier integrations: flight results are canned
//! offers priced from a fixed route table, and hotel search returns nothing.
//! Results are fully deterministic so callers can cache and test against
//! them.

use serde::{Deserialize, Serialize};

/// A flight search query. Searches with any missing field return no offers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightSearchRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
}

/// One bookable flight in a search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    /// Airline plus flight number, e.g. `"Delta-1200"`.
    pub id: String,
    pub airline: String,
    #[serde(rename = "class")]
    pub cabin: String,
    pub departure_time: String,
    pub arrival_time: String,
    /// Human-readable duration, e.g. `"6h 30m"`.
    pub duration: String,
    pub price: i64,
}

/// A hotel search query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelSearchRequest {
    pub location: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

/// One bookable hotel in a search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelOffer {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub check_in: String,
    pub check_out: String,
}

const AIRLINES: [&str; 5] = ["Delta", "United", "American", "Southwest", "JetBlue"];

/// Cabin classes with their price multipliers over the route base fare.
const CABINS: [(&str, f64); 4] = [
    ("Economy", 1.0),
    ("Premium Economy", 1.5),
    ("Business", 2.5),
    ("First", 4.0),
];

const DEPARTURE_TIMES: [&str; 12] = [
    "06:00", "07:30", "09:00", "10:30", "12:00", "13:30", "15:00", "16:30", "18:00", "19:30",
    "21:00", "22:30",
];

/// Flight duration in minutes for the known demo routes.
fn route_duration_minutes(from: &str, to: &str) -> i64 {
    match (from, to) {
        ("New York", "Los Angeles") | ("Los Angeles", "New York") => 390,
        ("New York", "London") | ("London", "New York") => 435,
        ("New York", "Tokyo") | ("Tokyo", "New York") => 870,
        ("Los Angeles", "London") | ("London", "Los Angeles") => 645,
        ("Los Angeles", "Tokyo") | ("Tokyo", "Los Angeles") => 690,
        ("London", "Tokyo") | ("Tokyo", "London") => 735,
        _ => 300,
    }
}

/// Base economy fare for the known demo routes.
fn route_base_price(from: &str, to: &str) -> i64 {
    match (from, to) {
        ("New York", "Los Angeles") | ("Los Angeles", "New York") => 400,
        ("New York", "London") | ("London", "New York") => 600,
        ("New York", "Tokyo") | ("Tokyo", "New York") => 1200,
        ("Los Angeles", "London") | ("London", "Los Angeles") => 800,
        ("Los Angeles", "Tokyo") | ("Tokyo", "Los Angeles") => 900,
        ("London", "Tokyo") | ("Tokyo", "London") => 1000,
        _ => 500,
    }
}

fn format_duration(minutes: i64) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

fn format_time(minutes_past_midnight: i64) -> String {
    let wrapped = minutes_past_midnight.rem_euclid(24 * 60);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

fn parse_time(time: &str) -> i64 {
    let (hours, minutes) = time.split_once(':').unwrap_or(("0", "0"));
    let hours: i64 = hours.parse().unwrap_or(0);
    let minutes: i64 = minutes.parse().unwrap_or(0);
    hours * 60 + minutes
}

/// Search for flights between two locations on a date.
///
/// Returns one offer per cabin class, priced from the route table and sorted
/// by price. An incomplete query returns no offers rather than an error.
pub fn search_flights(request: &FlightSearchRequest) -> Vec<FlightOffer> {
    let (Some(from), Some(to), Some(_date)) = (&request.from, &request.to, &request.date) else {
        return Vec::new();
    };
    if from.is_empty() || to.is_empty() {
        return Vec::new();
    }

    let duration_minutes = route_duration_minutes(from, to);
    let base_price = route_base_price(from, to);

    let mut offers: Vec<FlightOffer> = CABINS
        .iter()
        .enumerate()
        .map(|(i, (cabin, multiplier))| {
            let airline = AIRLINES[i % AIRLINES.len()];
            let departure_time = DEPARTURE_TIMES[(i * 3) % DEPARTURE_TIMES.len()];
            let arrival_minutes = parse_time(departure_time) + duration_minutes;

            FlightOffer {
                id: format!("{}-{}", airline, 1200 + (i as i64) * 110),
                airline: airline.to_string(),
                cabin: cabin.to_string(),
                departure_time: departure_time.to_string(),
                arrival_time: format_time(arrival_minutes),
                duration: format_duration(duration_minutes),
                price: (base_price as f64 * multiplier).round() as i64,
            }
        })
        .collect();

    offers.sort_by_key(|offer| offer.price);
    offers
}

/// Search for hotels. Not wired to any inventory; always returns no offers.
pub fn search_hotels(_request: &HotelSearchRequest) -> Vec<HotelOffer> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> FlightSearchRequest {
        FlightSearchRequest {
            from: Some("New York".to_string()),
            to: Some("Tokyo".to_string()),
            date: Some("2025-06-01".to_string()),
        }
    }

    #[test]
    fn incomplete_query_returns_no_offers() {
        assert!(search_flights(&FlightSearchRequest::default()).is_empty());

        let missing_date = FlightSearchRequest {
            from: Some("New York".to_string()),
            to: Some("Tokyo".to_string()),
            date: None,
        };
        assert!(search_flights(&missing_date).is_empty());
    }

    #[test]
    fn offers_are_sorted_by_price() {
        let offers = search_flights(&full_request());
        assert_eq!(offers.len(), 4);
        for pair in offers.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn prices_follow_route_table_and_cabin_multipliers() {
        let offers = search_flights(&full_request());
        let economy = offers.iter().find(|o| o.cabin == "Economy").unwrap();
        let first = offers.iter().find(|o| o.cabin == "First").unwrap();

        assert_eq!(economy.price, 1200);
        assert_eq!(first.price, 4800);
        assert_eq!(economy.duration, "14h 30m");
    }

    #[test]
    fn unknown_route_falls_back_to_defaults() {
        let request = FlightSearchRequest {
            from: Some("Lisbon".to_string()),
            to: Some("Oslo".to_string()),
            date: Some("2025-06-01".to_string()),
        };
        let offers = search_flights(&request);
        let economy = offers.iter().find(|o| o.cabin == "Economy").unwrap();

        assert_eq!(economy.price, 500);
        assert_eq!(economy.duration, "5h 00m");
    }

    #[test]
    fn results_are_deterministic() {
        assert_eq!(
            serde_json::to_value(search_flights(&full_request())).unwrap(),
            serde_json::to_value(search_flights(&full_request())).unwrap()
        );
    }

    #[test]
    fn hotel_search_is_an_empty_stub() {
        let request = HotelSearchRequest {
            location: Some("Tokyo".to_string()),
            check_in: Some("2025-06-01".to_string()),
            check_out: Some("2025-06-05".to_string()),
        };
        assert!(search_hotels(&request).is_empty());
    }

    #[test]
    fn arrival_time_wraps_past_midnight() {
        let request = FlightSearchRequest {
            from: Some("New York".to_string()),
            to: Some("Tokyo".to_string()),
            date: Some("2025-06-01".to_string()),
        };
        let offers = search_flights(&request);
        // First cabin departs 06:00 on a 14h30m route: arrives 20:30 same day
        let economy = offers.iter().find(|o| o.cabin == "Economy").unwrap();
        assert_eq!(economy.arrival_time, "20:30");
    }
}
