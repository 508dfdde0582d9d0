// SPDX-License-Identifier: MPL-2.0
//! UI components for the application.

pub mod viewer;
