// crates/reactor-core/src/helpers/mod.rs
//
// Pure layout math shared by the controller and the UI crate.

pub mod layout;
pub mod scale;
