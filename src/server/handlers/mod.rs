// src/server/handlers/mod.rs
//! HTTP request handlers for the recipe server

pub mod admin;
pub mod index;
pub mod recipes;
pub mod search;
