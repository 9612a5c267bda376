//! # Vehicle models
//!
//! A [`Car`] is the server's full record of one owned vehicle. Its
//! [`CarStatus`] is a closed set that decides which optional fields matter:
//! listing fields only once the car is `LISTED`, sale fields only once it is
//! `SOLD`. [`CarStats`] are derived by the server (expense totals, cost
//! basis, profit and margin) and are never computed on the client.
//!
//! Outgoing payloads:
//!
//! | Struct | Endpoint |
//! |--------|----------|
//! | [`NewCar`] | `POST /cars` |
//! | [`CarUpdate`] | `PATCH /cars/{uid}`: the editable subset only, `None` sent as `null` |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::resource::Identified;

/// Lifecycle stage of a vehicle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarStatus {
    #[default]
    Fresh,
    Repairing,
    Detailing,
    Listed,
    Sold,
}

impl CarStatus {
    pub const ALL: [CarStatus; 5] = [
        CarStatus::Fresh,
        CarStatus::Repairing,
        CarStatus::Detailing,
        CarStatus::Listed,
        CarStatus::Sold,
    ];

    /// Wire value, also used as the `<option>` value in forms.
    pub fn as_wire(&self) -> &'static str {
        match self {
            CarStatus::Fresh => "FRESH",
            CarStatus::Repairing => "REPAIRING",
            CarStatus::Detailing => "DETAILING",
            CarStatus::Listed => "LISTED",
            CarStatus::Sold => "SOLD",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CarStatus::Fresh => "Just bought",
            CarStatus::Repairing => "In repair",
            CarStatus::Detailing => "Detailing",
            CarStatus::Listed => "Listed for sale",
            CarStatus::Sold => "Sold",
        }
    }

    /// Listing date/price are meaningful from `LISTED` on.
    pub fn shows_listing(&self) -> bool {
        matches!(self, CarStatus::Listed | CarStatus::Sold)
    }

    /// Sale date/price are meaningful only once `SOLD`.
    pub fn shows_sale(&self) -> bool {
        matches!(self, CarStatus::Sold)
    }
}

/// A vehicle owned by the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    pub uid: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub vin: String,
    /// Vehicle title (passport) number.
    #[serde(default)]
    pub pts_num: String,
    /// Registration certificate number.
    #[serde(default)]
    pub sts_num: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CarStatus,
    pub date_purchased: NaiveDate,
    #[serde(default)]
    pub price_purchased: i64,
    #[serde(default)]
    pub date_listed: Option<NaiveDate>,
    #[serde(default)]
    pub price_listed: Option<i64>,
    #[serde(default)]
    pub date_sold: Option<NaiveDate>,
    #[serde(default)]
    pub price_sold: Option<i64>,
    #[serde(default)]
    pub autoteka_link: Option<String>,
    #[serde(default)]
    pub avito_link: Option<String>,
    #[serde(default)]
    pub autoru_link: Option<String>,
    #[serde(default)]
    pub drom_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub stats: Option<CarStats>,
}

impl Car {
    /// "Make Model (Year)"
    pub fn title(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }

    /// Listing date/price are shown from `LISTED` on, and whenever the server
    /// still has either value.
    pub fn shows_listing(&self) -> bool {
        self.status.shows_listing() || self.date_listed.is_some() || self.price_listed.is_some()
    }

    /// Same rule for the sale date/price.
    pub fn shows_sale(&self) -> bool {
        self.status.shows_sale() || self.date_sold.is_some() || self.price_sold.is_some()
    }

    /// External listing links that are set, labelled for display.
    pub fn listing_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Avito", self.avito_link.as_deref()),
            ("Auto.ru", self.autoru_link.as_deref()),
            ("Drom", self.drom_link.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, link)| link.filter(|l| !l.is_empty()).map(|l| (label, l)))
        .collect()
    }
}

impl Identified for Car {
    fn id(&self) -> &str {
        &self.uid
    }
}

/// Server-derived aggregates attached to a [`Car`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CarStats {
    #[serde(default)]
    pub total_expenses: i64,
    #[serde(default)]
    pub cost_basis: i64,
    #[serde(default)]
    pub potential_profit: Option<i64>,
    #[serde(default)]
    pub potential_margin: Option<f64>,
    #[serde(default)]
    pub actual_profit: Option<i64>,
    #[serde(default)]
    pub actual_margin: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owners_stats: Vec<OwnerStats>,
}

/// Contribution and payout of one co-owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerStats {
    pub owner_uid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub owner_total_expenses: i64,
    #[serde(default)]
    pub net_payout: i64,
}

/// Body of `POST /cars`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: String,
    pub vin: String,
    pub pts_num: String,
    pub sts_num: String,
    pub date_purchased: NaiveDate,
    pub price_purchased: i64,
    pub status: CarStatus,
}

/// Body of `PATCH /cars/{uid}`.
///
/// Every field is always serialised; `None` goes out as an explicit `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CarUpdate {
    pub price_purchased: Option<i64>,
    pub date_listed: Option<NaiveDate>,
    pub price_listed: Option<i64>,
    pub date_sold: Option<NaiveDate>,
    pub price_sold: Option<i64>,
    pub autoteka_link: Option<String>,
    pub avito_link: Option<String>,
    pub autoru_link: Option<String>,
    pub drom_link: Option<String>,
    pub notes: Option<String>,
    pub status: Option<CarStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAR_JSON: &str = r#"{
        "uid": "5d1c",
        "make": "Toyota",
        "model": "Camry",
        "year": "2015",
        "vin": "JT2BG22K1Y0123456",
        "pts_num": "77 ОХ 123456",
        "sts_num": "99 01 654321",
        "status": "LISTED",
        "date_purchased": "2024-03-01",
        "price_purchased": 900000,
        "date_listed": "2024-04-10",
        "price_listed": 1150000,
        "date_sold": null,
        "avito_link": "https://avito.ru/1",
        "drom_link": "",
        "created_at": "2024-03-01T10:00:00Z",
        "stats": {
            "total_expenses": 85000,
            "cost_basis": 985000,
            "potential_profit": 165000,
            "potential_margin": 16.75,
            "owners_stats": null
        }
    }"#;

    #[test]
    fn test_decode_car_with_stats() {
        let car: Car = serde_json::from_str(CAR_JSON).unwrap();
        assert_eq!(car.status, CarStatus::Listed);
        assert_eq!(car.title(), "Toyota Camry (2015)");
        assert_eq!(car.price_listed, Some(1_150_000));
        assert!(car.date_sold.is_none());
        let stats = car.stats.unwrap();
        assert_eq!(stats.cost_basis, 985_000);
        assert!(stats.owners_stats.is_empty());
        assert!(stats.actual_profit.is_none());
    }

    #[test]
    fn test_null_status_defaults_to_fresh() {
        let json = CAR_JSON.replace(r#""status": "LISTED""#, r#""status": null"#);
        let car: Car = serde_json::from_str(&json).unwrap();
        assert_eq!(car.status, CarStatus::Fresh);
    }

    #[test]
    fn test_listing_links_skip_empty() {
        let car: Car = serde_json::from_str(CAR_JSON).unwrap();
        assert_eq!(car.listing_links(), vec![("Avito", "https://avito.ru/1")]);
    }

    #[test]
    fn test_status_field_relevance() {
        assert!(!CarStatus::Repairing.shows_listing());
        assert!(CarStatus::Listed.shows_listing());
        assert!(!CarStatus::Listed.shows_sale());
        assert!(CarStatus::Sold.shows_sale());
        assert_eq!(CarStatus::from_wire("DETAILING"), Some(CarStatus::Detailing));
        assert_eq!(CarStatus::from_wire("detailing"), None);
    }

    #[test]
    fn test_stored_listing_shown_after_status_rollback() {
        let json = CAR_JSON.replace(r#""status": "LISTED""#, r#""status": "REPAIRING""#);
        let car: Car = serde_json::from_str(&json).unwrap();
        assert!(!car.status.shows_listing());
        assert!(car.shows_listing());
        assert!(!car.shows_sale());

        let sold_price_only = Car {
            price_sold: Some(1_200_000),
            ..car
        };
        assert!(sold_price_only.shows_sale());
    }

    #[test]
    fn test_update_sends_nulls() {
        let update = CarUpdate {
            price_purchased: Some(900_000),
            ..CarUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert_eq!(obj["price_purchased"], serde_json::json!(900_000));
        assert!(obj["notes"].is_null());
        assert!(obj["status"].is_null());
    }
}
