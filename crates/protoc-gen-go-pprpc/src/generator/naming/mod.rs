pub mod conventions;
pub mod identifiers;

#[cfg(test)]
mod tests;
