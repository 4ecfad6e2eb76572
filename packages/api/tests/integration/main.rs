#![cfg(feature = "server")]

mod contact_tests;
mod formspree_tests;
