mod home;
pub use home::Home;

mod service_detail;
pub use service_detail::ServiceDetail;

mod not_found;
pub use not_found::PageNotFound;
