//! Terminal rendering for the one-shot commands.

pub mod table;
