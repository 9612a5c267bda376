mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod profile;
pub use profile::ProfileView;

mod edit_profile;
pub use edit_profile::EditProfileView;

mod car_list;
pub use car_list::CarListView;

mod new_car;
pub use new_car::NewCarView;

mod car_detail;
pub use car_detail::CarDetailView;

mod expense_ledger;
pub use expense_ledger::ExpenseLedger;
