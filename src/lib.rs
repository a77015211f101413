//! quadfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks can write `quadfall::core::Engine`.

pub use quadfall_core as core;
pub use quadfall_input as input;
pub use quadfall_term as term;
pub use quadfall_types as types;
