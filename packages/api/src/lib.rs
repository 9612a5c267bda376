//! # API crate — typed client for the Flipper REST backend
//!
//! This crate is everything the views need to talk to the remote API without
//! touching the UI layer. The backend is an external service; this crate only
//! consumes it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base-address wrapper that injects the bearer token, handles 401 globally, and exposes one method per endpoint |
//! | [`transport`] | The [`Transport`] seam and its production [`ReqwestTransport`] implementation |
//! | [`error`] | [`ApiError`] taxonomy and parsing of server error bodies |
//! | [`models`] | Wire types: users, cars, expenses, pages and envelopes |
//! | [`gate`] | Session check state machine shared by the protected and public route gates |
//! | [`resource`] | [`ResourceList`], the fetch-page / prepend / remove / total abstraction used by list views |
//! | [`forms`] | Client-side validation and normalisation of every form before it is submitted |
//!
//! ## Endpoints
//!
//! - **Auth**: `login`, `validate_session`, `me`, `logout` (local)
//! - **Users**: `signup`, `update_profile`
//! - **Cars**: `my_cars`, `create_car`, `get_car`, `update_car`
//! - **Expenses**: `car_expenses`, `create_expense`, `delete_expense`

pub mod client;
pub mod error;
pub mod forms;
pub mod gate;
pub mod models;
pub mod resource;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use error::{ApiError, ValidationIssue};
pub use forms::FieldErrors;
pub use gate::{check_session, GateKind, GateOutcome, GateState};
pub use models::{
    Car, CarStats, CarStatus, CarUpdate, Expense, ExpenseAuthor, ExpenseType, ListQuery, NewCar,
    NewExpense, OwnerStats, Page, ProfileUpdate, SignupRequest, SortOrder, TokenResponse,
    UserProfile,
};
pub use resource::{Identified, LoadState, ResourceList};
pub use transport::{HttpRequest, HttpResponse, Method, RequestBody, ReqwestTransport, Transport};
