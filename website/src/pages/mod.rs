pub mod features;
pub mod home;
pub mod how_it_works;
pub mod live_data;
pub mod report;
