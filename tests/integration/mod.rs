//! Integration tests
//!
//! Each test spins up a canned in-process backend and drives the real
//! clients and services against it over loopback HTTP.

mod support;

mod chat_test;
mod reports_test;
