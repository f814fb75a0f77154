//! London Transit bus arrival server.
//!
//! Scrapes the LTC WebWatch site for routes and live arrival predictions,
//! and serves them as JSON filtered by direction or stop and ranked by
//! distance from a caller's location.

pub mod cache;
pub mod config;
pub mod domain;
pub mod feed;
pub mod query;
pub mod service;
pub mod web;
pub mod webwatch;

#[cfg(test)]
mod test_support;
