// src/lib.rs

pub mod config;
pub mod error;
pub mod invoker;
pub mod llm;
pub mod persona;
pub mod web;

pub use error::CompletionError;
pub use invoker::CompletionInvoker;
pub use persona::{Persona, resolve_instruction};
