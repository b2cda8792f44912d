pub mod config;
pub mod errors;
pub mod llm_client;
pub mod prep;
pub mod relay;
pub mod routes;
pub mod state;
