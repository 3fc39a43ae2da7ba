//! HTTP request handlers for the buoyfinder API.

pub mod common;
pub mod date;
pub mod health;
pub mod latest;
pub mod pages;
pub mod stations;
