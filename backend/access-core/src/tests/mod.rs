mod classify;
mod config;
mod credential;
mod router;
mod support;
