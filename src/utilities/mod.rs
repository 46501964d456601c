//! Shared helpers: string normalization and console printing.

pub mod printer;
pub mod string_utils;
