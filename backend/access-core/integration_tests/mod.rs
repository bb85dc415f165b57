mod error;
mod helpers;
mod pipeline;
mod stats;
mod upload;
