mod commands;

pub use commands::*;

#[cfg(test)]
mod tests;
