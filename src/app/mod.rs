pub mod dispatch;
pub mod edit;
pub mod status;
