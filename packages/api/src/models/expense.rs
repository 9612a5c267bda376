//! Expense ledger models.

use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::resource::Identified;

/// Expense category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    Purchase,
    Parts,
    WheelsTires,
    RepairLabor,
    PaintBody,
    Fuel,
    Detailing,
    Advertising,
    #[default]
    Other,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 9] = [
        ExpenseType::Purchase,
        ExpenseType::Parts,
        ExpenseType::WheelsTires,
        ExpenseType::RepairLabor,
        ExpenseType::PaintBody,
        ExpenseType::Fuel,
        ExpenseType::Detailing,
        ExpenseType::Advertising,
        ExpenseType::Other,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            ExpenseType::Purchase => "PURCHASE",
            ExpenseType::Parts => "PARTS",
            ExpenseType::WheelsTires => "WHEELS_TIRES",
            ExpenseType::RepairLabor => "REPAIR_LABOR",
            ExpenseType::PaintBody => "PAINT_BODY",
            ExpenseType::Fuel => "FUEL",
            ExpenseType::Detailing => "DETAILING",
            ExpenseType::Advertising => "ADVERTISING",
            ExpenseType::Other => "OTHER",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_wire() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Purchase => "Purchase",
            ExpenseType::Parts => "Parts",
            ExpenseType::WheelsTires => "Wheels & tires",
            ExpenseType::RepairLabor => "Repair labor",
            ExpenseType::PaintBody => "Paint & body",
            ExpenseType::Fuel => "Fuel",
            ExpenseType::Detailing => "Detailing",
            ExpenseType::Advertising => "Advertising",
            ExpenseType::Other => "Other",
        }
    }
}

/// Who recorded an expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseAuthor {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// One cost entry of a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub uid: String,
    #[serde(default)]
    pub car_uid: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: ExpenseType,
    pub name: String,
    pub exp_summ: i64,
    /// Server timestamp; kept verbatim because the backend omits the offset.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<ExpenseAuthor>,
}

impl Expense {
    /// `YYYY-MM-DD` part of the creation timestamp.
    pub fn created_date(&self) -> Option<&str> {
        self.created_at.as_deref().map(|ts| ts.get(..10).unwrap_or(ts))
    }

    pub fn author_label(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.email.as_deref().or(u.username.as_deref()))
            .unwrap_or("-")
    }
}

impl Identified for Expense {
    fn id(&self) -> &str {
        &self.uid
    }
}

/// Body of `POST /cars/{uid}/expenses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpense {
    #[serde(rename = "type")]
    pub kind: ExpenseType,
    pub name: String,
    pub exp_summ: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_expense() {
        let exp: Expense = serde_json::from_str(
            r#"{"uid":"e1","car_uid":"c1","type":"WHEELS_TIRES","name":"Winter set",
                "exp_summ":42000,"created_at":"2024-05-02T12:30:00.123",
                "user":{"email":"owner@flip.io"}}"#,
        )
        .unwrap();
        assert_eq!(exp.kind, ExpenseType::WheelsTires);
        assert_eq!(exp.created_date(), Some("2024-05-02"));
        assert_eq!(exp.author_label(), "owner@flip.io");
    }

    #[test]
    fn test_new_expense_uses_type_key() {
        let body = serde_json::to_value(NewExpense {
            kind: ExpenseType::RepairLabor,
            name: "Timing belt".to_string(),
            exp_summ: 15000,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"type": "REPAIR_LABOR", "name": "Timing belt", "exp_summ": 15000})
        );
    }

    #[test]
    fn test_missing_author_label() {
        let exp: Expense =
            serde_json::from_str(r#"{"uid":"e2","type":null,"name":"Fuel","exp_summ":3000}"#)
                .unwrap();
        assert_eq!(exp.kind, ExpenseType::Other);
        assert_eq!(exp.author_label(), "-");
        assert!(exp.created_date().is_none());
    }
}
