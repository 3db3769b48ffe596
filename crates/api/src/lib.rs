//! `authserver-api` — HTTP surface over the auth core.

pub mod app;
