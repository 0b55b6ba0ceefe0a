//! Downstream hooks fired by the parser on successful reductions.
//!
//! - A symbol table of declared names, temporaries and labels
//! - Three-address code quadruples for declarations, temporaries and labels

pub mod symbol_table;
pub mod tac;

#[cfg(test)]
mod tests;
