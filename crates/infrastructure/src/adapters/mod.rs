//! Adapter implementations of the application ports.

mod reqwest_client;
mod system_clock;

pub use reqwest_client::ReqwestManagementClient;
pub use system_clock::SystemClock;
