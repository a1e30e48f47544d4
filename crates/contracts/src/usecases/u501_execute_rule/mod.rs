pub mod request;
pub mod response;

pub use request::ExecuteRequest;
pub use response::{ExecuteResponse, ExecutionFlag};
