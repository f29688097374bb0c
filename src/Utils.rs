/// logging setup: terminal and file loggers on top of simplelog
pub mod logger;
/// scalar sanitizers for user-facing numeric input
pub mod parsers;
