// SPDX-License-Identifier: MPL-2.0
//! `engilearn` is a study-materials portal prototype built with the Iced GUI
//! framework.
//!
//! It provides a login screen, an admin upload dashboard, and a student
//! browse/search dashboard over an in-memory catalog, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design. All backend interactions are timed stubs pending a real API.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
