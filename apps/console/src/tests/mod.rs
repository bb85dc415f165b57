mod commands;
mod error;
