/*
 * This module provides the application logic layer, centered around
 * `SaveController`, which acts as the Presenter for the export feature:
 * validation, error dialogs and writing of the generated files.
 * Unit tests for `SaveController` are in `handler_tests.rs`.
 */
pub mod handler;
pub mod ui_constants;


pub use handler::{OutcomeCode, SaveController};
