//! Leptos view components.

pub mod message_list;
