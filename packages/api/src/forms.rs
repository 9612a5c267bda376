//! # Form validation
//!
//! Every form in the app holds its inputs as raw strings. Before anything is
//! sent, the form is validated here and turned into its request type. A form
//! that fails validation yields [`FieldErrors`] and the view makes no network
//! call.
//!
//! | Form | Produces | Rules |
//! |------|----------|-------|
//! | [`LoginForm`] | `(email, password)` | email well-formed, password present |
//! | [`SignupForm`] | [`SignupRequest`] | all fields present, password ≥ 8 chars, confirmation matches |
//! | [`ProfileForm`] | [`ProfileUpdate`] | username present; blank names become `null` |
//! | [`NewCarForm`] | [`NewCar`] | text fields present, plausible year, date, non-negative price |
//! | [`CarEditForm`] | [`CarUpdate`] | purchase price present; blanks become `null` |
//! | [`ExpenseForm`] | [`NewExpense`] | category, name and a positive amount |

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{
    Car, CarStatus, CarUpdate, ExpenseType, NewCar, NewExpense, ProfileUpdate, SignupRequest,
};

/// Field name → the single message shown under that field.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub const MIN_PASSWORD_LEN: usize = 8;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `local@domain.tld` with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Trimmed value, or `None` when blank.
pub fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}

fn parse_amount(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    allow_zero: bool,
) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 || (allow_zero && n == 0) => Some(n),
        _ => {
            let message = if allow_zero {
                "Must be a whole number, zero or more"
            } else {
                "Must be a positive whole number"
            };
            errors.insert(field, message.to_string());
            None
        }
    }
}

fn parse_date(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, "Use the YYYY-MM-DD format".to_string());
            None
        }
    }
}

fn finish<T>(errors: FieldErrors, value: Option<T>) -> Result<T, FieldErrors> {
    match value {
        Some(value) if errors.is_empty() => Ok(value),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", "Email is required".to_string());
        } else if !is_valid_email(email) {
            errors.insert("email", "Enter a valid email address".to_string());
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "username", &self.username, "Username is required");
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", "Email is required".to_string());
        } else if !is_valid_email(email) {
            errors.insert("email", "Enter a valid email address".to_string());
        }
        require(&mut errors, "first_name", &self.first_name, "First name is required");
        require(&mut errors, "last_name", &self.last_name, "Last name is required");

        if self.password.is_empty() {
            errors.insert("password", "Password is required".to_string());
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if self.confirm_password != self.password {
            errors.insert("confirm_password", "Passwords do not match".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupRequest {
            username: self.username.trim().to_string(),
            email: email.to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &crate::UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            first_name: profile.first_name.clone().unwrap_or_default(),
            last_name: profile.last_name.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "username", &self.username, "Username is required");
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ProfileUpdate {
            username: self.username.trim().to_string(),
            first_name: blank_to_none(&self.first_name),
            last_name: blank_to_none(&self.last_name),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCarForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub vin: String,
    pub pts_num: String,
    pub sts_num: String,
    pub date_purchased: String,
    pub price_purchased: String,
    pub status: CarStatus,
}

impl Default for NewCarForm {
    fn default() -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: String::new(),
            vin: String::new(),
            pts_num: String::new(),
            sts_num: String::new(),
            date_purchased: Utc::now().date_naive().format(DATE_FORMAT).to_string(),
            price_purchased: String::new(),
            status: CarStatus::Fresh,
        }
    }
}

impl NewCarForm {
    pub fn validate(&self) -> Result<NewCar, FieldErrors> {
        self.validate_in(Utc::now().year())
    }

    fn validate_in(&self, current_year: i32) -> Result<NewCar, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "make", &self.make, "Make is required");
        require(&mut errors, "model", &self.model, "Model is required");
        require(&mut errors, "vin", &self.vin, "VIN is required");
        require(&mut errors, "pts_num", &self.pts_num, "Title number is required");
        require(&mut errors, "sts_num", &self.sts_num, "Registration number is required");

        let year = self.year.trim();
        let year_ok = year.len() == 4
            && year
                .parse::<i32>()
                .map(|y| (1900..=current_year + 1).contains(&y))
                .unwrap_or(false);
        if !year_ok {
            errors.insert(
                "year",
                format!("Enter a year between 1900 and {}", current_year + 1),
            );
        }

        require(&mut errors, "date_purchased", &self.date_purchased, "Purchase date is required");
        let date_purchased = parse_date(&mut errors, "date_purchased", &self.date_purchased);

        require(
            &mut errors,
            "price_purchased",
            &self.price_purchased,
            "Purchase price is required",
        );
        let price_purchased =
            parse_amount(&mut errors, "price_purchased", &self.price_purchased, true);

        let car = match (date_purchased, price_purchased) {
            (Some(date_purchased), Some(price_purchased)) => Some(NewCar {
                make: self.make.trim().to_string(),
                model: self.model.trim().to_string(),
                year: year.to_string(),
                vin: self.vin.trim().to_string(),
                pts_num: self.pts_num.trim().to_string(),
                sts_num: self.sts_num.trim().to_string(),
                date_purchased,
                price_purchased,
                status: self.status,
            }),
            _ => None,
        };
        finish(errors, car)
    }
}

/// Editable subset of a [`Car`], as strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarEditForm {
    pub price_purchased: String,
    pub date_listed: String,
    pub price_listed: String,
    pub date_sold: String,
    pub price_sold: String,
    pub autoteka_link: String,
    pub avito_link: String,
    pub autoru_link: String,
    pub drom_link: String,
    pub notes: String,
    pub status: CarStatus,
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn number_text(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

impl CarEditForm {
    /// Seed the form from the last fetched record.
    pub fn from_car(car: &Car) -> Self {
        Self {
            price_purchased: car.price_purchased.to_string(),
            date_listed: date_text(car.date_listed),
            price_listed: number_text(car.price_listed),
            date_sold: date_text(car.date_sold),
            price_sold: number_text(car.price_sold),
            autoteka_link: car.autoteka_link.clone().unwrap_or_default(),
            avito_link: car.avito_link.clone().unwrap_or_default(),
            autoru_link: car.autoru_link.clone().unwrap_or_default(),
            drom_link: car.drom_link.clone().unwrap_or_default(),
            notes: car.notes.clone().unwrap_or_default(),
            status: car.status,
        }
    }

    /// Listing inputs stay visible while either the chosen status or the
    /// stored record has listing data, so stored values can be cleared.
    pub fn shows_listing(&self, car: &Car) -> bool {
        self.status.shows_listing() || car.shows_listing()
    }

    pub fn shows_sale(&self, car: &Car) -> bool {
        self.status.shows_sale() || car.shows_sale()
    }

    /// The whole editable subset; every blank input becomes `None`.
    pub fn to_update(&self) -> Result<CarUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(
            &mut errors,
            "price_purchased",
            &self.price_purchased,
            "Purchase price is required",
        );
        let price_purchased =
            parse_amount(&mut errors, "price_purchased", &self.price_purchased, true);
        let update = CarUpdate {
            price_purchased,
            date_listed: parse_date(&mut errors, "date_listed", &self.date_listed),
            price_listed: parse_amount(&mut errors, "price_listed", &self.price_listed, true),
            date_sold: parse_date(&mut errors, "date_sold", &self.date_sold),
            price_sold: parse_amount(&mut errors, "price_sold", &self.price_sold, true),
            autoteka_link: blank_to_none(&self.autoteka_link),
            avito_link: blank_to_none(&self.avito_link),
            autoru_link: blank_to_none(&self.autoru_link),
            drom_link: blank_to_none(&self.drom_link),
            notes: blank_to_none(&self.notes),
            status: Some(self.status),
        };
        finish(errors, Some(update))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub kind: Option<ExpenseType>,
    pub name: String,
    pub amount: String,
}

impl ExpenseForm {
    pub fn validate(&self) -> Result<NewExpense, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.kind.is_none() {
            errors.insert("kind", "Category is required".to_string());
        }
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "amount", &self.amount, "Amount is required");
        let amount = parse_amount(&mut errors, "amount", &self.amount, false);

        let expense = match (self.kind, amount) {
            (Some(kind), Some(exp_summ)) => Some(NewExpense {
                kind,
                name: self.name.trim().to_string(),
                exp_summ,
            }),
            _ => None,
        };
        finish(errors, expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            username: "flipper".to_string(),
            email: "me@flip.io".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            password: "supersecret".to_string(),
            confirm_password: "supersecret".to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@.de"));
    }

    #[test]
    fn test_login_rejects_bad_email() {
        let form = LoginForm {
            email: "notanemail".to_string(),
            password: "whatever".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Enter a valid email address");
    }

    #[test]
    fn test_signup_mismatch_is_single_error() {
        let mut form = signup();
        form.confirm_password = "supersecreT".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["confirm_password"], "Passwords do not match");
    }

    #[test]
    fn test_signup_short_password_and_trimming() {
        let mut form = signup();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert!(form.validate().unwrap_err().contains_key("password"));

        let mut form = signup();
        form.username = "  flipper ".to_string();
        assert_eq!(form.validate().unwrap().username, "flipper");
    }

    #[test]
    fn test_profile_blank_names_are_null() {
        let form = ProfileForm {
            username: "flipper".to_string(),
            first_name: "  ".to_string(),
            last_name: "Petrov".to_string(),
        };
        let update = form.validate().unwrap();
        assert_eq!(update.first_name, None);
        assert_eq!(update.last_name.as_deref(), Some("Petrov"));

        let empty = ProfileForm::default();
        assert!(empty.validate().unwrap_err().contains_key("username"));
    }

    #[test]
    fn test_new_car_rules() {
        let mut form = NewCarForm {
            make: "Lada".to_string(),
            model: "Vesta".to_string(),
            year: "2020".to_string(),
            vin: "XTA000000L0000001".to_string(),
            pts_num: "77 ОХ 1".to_string(),
            sts_num: "99 01 2".to_string(),
            date_purchased: "2024-02-01".to_string(),
            price_purchased: "650000".to_string(),
            status: CarStatus::Fresh,
        };
        let car = form.validate_in(2024).unwrap();
        assert_eq!(car.price_purchased, 650_000);

        form.year = "2026".to_string();
        form.price_purchased = "-5".to_string();
        form.date_purchased = "01.02.2024".to_string();
        let errors = form.validate_in(2024).unwrap_err();
        assert_eq!(errors["year"], "Enter a year between 1900 and 2025");
        assert!(errors.contains_key("price_purchased"));
        assert!(errors.contains_key("date_purchased"));
    }

    #[test]
    fn test_car_edit_blanks_become_none() {
        let form = CarEditForm {
            price_purchased: "900000".to_string(),
            price_listed: "".to_string(),
            avito_link: "   ".to_string(),
            notes: "needs tires".to_string(),
            status: CarStatus::Listed,
            ..CarEditForm::default()
        };
        let update = form.to_update().unwrap();
        assert_eq!(update.price_purchased, Some(900_000));
        assert_eq!(update.price_listed, None);
        assert_eq!(update.avito_link, None);
        assert_eq!(update.notes.as_deref(), Some("needs tires"));
        assert_eq!(update.status, Some(CarStatus::Listed));

        let missing = CarEditForm::default();
        assert!(missing.to_update().unwrap_err().contains_key("price_purchased"));
    }

    #[test]
    fn test_car_edit_can_clear_listing_after_rollback() {
        let car: Car = serde_json::from_str(
            r#"{
                "uid": "c1", "make": "Lada", "model": "Vesta", "year": "2019",
                "vin": "XTA000000000001", "status": "REPAIRING",
                "date_purchased": "2024-01-05", "price_purchased": 700000,
                "date_listed": "2024-02-01", "price_listed": 850000
            }"#,
        )
        .unwrap();
        let mut form = CarEditForm::from_car(&car);
        assert!(form.shows_listing(&car));
        assert!(!form.shows_sale(&car));

        form.date_listed.clear();
        form.price_listed.clear();
        assert!(form.shows_listing(&car));
        let update = form.to_update().unwrap();
        assert_eq!(update.date_listed, None);
        assert_eq!(update.price_listed, None);
        assert_eq!(update.status, Some(CarStatus::Repairing));

        form.status = CarStatus::Sold;
        assert!(form.shows_sale(&car));
    }

    #[test]
    fn test_expense_requires_name_and_amount() {
        let form = ExpenseForm {
            kind: Some(ExpenseType::Parts),
            name: "".to_string(),
            amount: "".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("amount"));

        let form = ExpenseForm {
            kind: Some(ExpenseType::Fuel),
            name: "Tank".to_string(),
            amount: "0".to_string(),
        };
        assert_eq!(form.validate().unwrap_err()["amount"], "Must be a positive whole number");

        let form = ExpenseForm {
            kind: Some(ExpenseType::Fuel),
            name: " Tank ".to_string(),
            amount: "3500".to_string(),
        };
        let expense = form.validate().unwrap();
        assert_eq!(expense.name, "Tank");
        assert_eq!(expense.exp_summ, 3500);
    }
}
