// src/lib.rs

//! Page mirror service library.

pub mod banner;
pub mod code;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod rewrite;
pub mod safety;
pub mod services;
pub mod state;
pub mod storage;
pub mod web;
