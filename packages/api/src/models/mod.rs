//! Wire models exchanged with the REST API.

mod car;
mod expense;
mod page;
mod user;

pub use car::{Car, CarStats, CarStatus, CarUpdate, NewCar, OwnerStats};
pub use expense::{Expense, ExpenseAuthor, ExpenseType, NewExpense};
pub(crate) use page::MaybeEnveloped;
pub use page::{ListQuery, Page, SortOrder};
pub use user::{ProfileUpdate, SignupRequest, TokenResponse, UserProfile};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
