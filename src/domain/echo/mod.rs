pub mod dto;
pub mod handler;
pub mod log_policy;
pub mod service;
pub mod validation;

pub use dto::{EchoRequest, EchoResponse};
pub use handler::echo_handler;
pub use log_policy::ContentLogging;
pub use service::{Clock, EchoService, SystemClock};
pub use validation::RequestValidator;
