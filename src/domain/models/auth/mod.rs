pub mod authentication_request;

pub use authentication_request::LoginPayload;
