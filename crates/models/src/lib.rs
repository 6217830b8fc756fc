pub mod errors;
pub mod db;
pub mod number;
pub mod sum;
pub mod record;

#[cfg(test)]
mod tests;
