// SPDX-License-Identifier: MPL-2.0
//! Pure domain types for the portal: roles, study materials, and the
//! catalog filter algorithm. No I/O and no UI concerns live here.

pub mod material;
pub mod role;

pub use material::{MaterialId, MaterialKind, MaterialSource, StudyMaterial, Year};
pub use role::Role;
