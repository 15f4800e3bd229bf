//! HTTP handlers: House CRUD backed by the store, plus validate-and-echo
//! handlers for Room, Device, Users and House-User.

pub mod device;
pub mod house;
pub mod house_user;
pub mod room;
pub mod user;
