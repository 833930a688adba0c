pub mod box_office;
pub mod parse;
pub mod request;
pub mod runtime;
