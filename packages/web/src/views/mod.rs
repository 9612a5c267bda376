mod public;
pub use public::{Home, Login, NotFound, Signup};

mod app_layout;
pub use app_layout::AppLayout;

mod cars;
pub use cars::{CarDetail, Cars, NewCar};

mod profile;
pub use profile::{EditProfile, Profile};
