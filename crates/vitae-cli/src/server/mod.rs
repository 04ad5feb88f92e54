//! Web form server: upload a résumé, paste a job description, get a report.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
