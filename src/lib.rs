// ABOUTME: Library crate for the signup wizard exposing the page model, wizard and billing engines

#![allow(missing_docs)]

pub mod app;
pub mod billing;
pub mod cli;
pub mod components;
pub mod config;
pub mod page;
pub mod wizard;
