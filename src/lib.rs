//! Payble - Bill reminders and payment notifications
//!
//! This crate tracks bills users owe, derives an in-app notification feed,
//! emails reminders for bills coming due, and settles reminders from
//! payment gateway checkouts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
