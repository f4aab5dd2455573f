pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod feed;
pub mod listing;
pub mod web;
