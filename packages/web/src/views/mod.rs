mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod car_form;
pub use car_form::{EditCar, NewCar};

mod car_detail;
pub use car_detail::CarDetail;
