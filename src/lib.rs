//! Backend for a portfolio site's chat widget: forwards one message to a
//! hosted chat-completion API and always answers with something presentable.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
