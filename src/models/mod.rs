pub mod accommodation;
pub mod account;
pub mod booking;
pub mod contact;
pub mod content;
pub mod gallery;
