pub mod asset;
pub mod github;
pub mod http;
pub mod release;
pub mod server;
pub mod site;
