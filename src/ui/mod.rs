// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`login`] - Role selection and sign-in form
//! - [`student`] - Student dashboard: year selection, search, material list
//! - [`admin`] - Admin dashboard: upload form and recent uploads
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top navigation bar with logout
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod admin;
pub mod design_tokens;
pub mod login;
pub mod navbar;
pub mod notifications;
pub mod student;
pub mod styles;
pub mod theming;
