//! Request handlers.

pub mod pages;
pub mod projects;

#[cfg(test)]
mod pages_test;
