pub mod albums;
pub mod artists;
pub mod charts;
pub mod home;
