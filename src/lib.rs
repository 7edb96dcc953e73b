//! Vitalis - life-expectancy questions answered from data
//!
//! A question router that answers a fixed set of Portuguese questions
//! (global mean, per-country mean, highest and lowest life expectancy,
//! GDP correlation) directly from a WHO life-expectancy dataset, and hands
//! everything else to an OpenAI-compatible chat-completions service.

pub mod api;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod dataset;
pub mod fallback;
pub mod logging;
pub mod router;
