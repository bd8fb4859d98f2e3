pub mod quiz;
pub mod request;
pub mod respond;
