//! File Talk - Conversational API over PDF documents
//!
//! Downloads a PDF from a caller-supplied URL, extracts text from a bounded
//! page range, and forwards it to an LLM agent to answer questions, produce
//! summaries, or generate study questions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
