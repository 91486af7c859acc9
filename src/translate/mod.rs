pub mod client;
pub mod interface;
pub mod orchestrator;
pub mod retry;
pub mod script;

pub use interface::{Endpoint, Inference, TranslateApiRequest, Translation};
pub use orchestrator::{Endpoints, Translator};
pub use retry::{RetryPolicy, RetryingClient};
