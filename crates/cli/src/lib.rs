//! Building blocks shared by the Podtally command line front end.

pub mod config;
