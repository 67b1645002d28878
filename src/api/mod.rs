//! HTTP access to the weekly quiz API.

mod client;

pub use client::QuizApi;
