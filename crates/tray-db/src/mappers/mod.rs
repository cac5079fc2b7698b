//! Model to entity mappers
//!
//! Conversions from database rows (tray-db models) to domain entities
//! (tray-core). Inserts bind entity fields directly in the repositories, so
//! only the row → entity direction lives here.

mod egg;
mod member;
mod room;
mod tray;
mod user;
