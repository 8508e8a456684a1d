// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent bundles embedded in the binary.

pub mod fluent;

pub use fluent::I18n;
