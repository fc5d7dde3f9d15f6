pub mod form;
pub mod request;
pub mod topic;
