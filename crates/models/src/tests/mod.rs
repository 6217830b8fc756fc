/// Database connection and configuration tests
pub mod db_tests;

/// Entity insert/filter tests against a migrated schema
pub mod crud_tests;
