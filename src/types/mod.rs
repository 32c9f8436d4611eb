pub mod api_error;
pub mod form;
pub mod options;
pub mod payload;
pub mod response;

pub use api_error::*;
pub use form::*;
pub use options::*;
pub use payload::*;
pub use response::*;
