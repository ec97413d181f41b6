//! Cardsmith UI Components
//!
//! Small Dioxus widgets shared by the card editor: buttons, labelled text,
//! color and number inputs, and a toggle switch. They carry no card logic;
//! values flow in through props and out through event handlers.

pub mod components;

pub use components::*;
