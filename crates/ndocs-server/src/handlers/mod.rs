//! HTTP request handlers.

pub(crate) mod catalog;
pub(crate) mod index;
pub(crate) mod pages;
