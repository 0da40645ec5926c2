//! End-to-end tests driving the HTTP router in-process.

mod admin_users_test;
mod auth_test;
mod helpers;
mod security_test;
