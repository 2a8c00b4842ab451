mod client;
mod runner;
pub mod types;

pub use client::TelegramClient;
pub use runner::{confirm_offset, dispatch_batch, inbound_from_update, poll_once, run_polling};
