//! Unit tests for ordered registration.
