//! A singly-linked FIFO queue for owned text values.
//!
//! The crate is `no_std` and only requires `alloc`. See [`queue`] for the
//! container itself.
#![no_std]

extern crate alloc;

pub mod queue;
