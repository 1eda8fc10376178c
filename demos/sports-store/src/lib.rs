// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sports store built on crud-scaffold.
//!
//! Two entities, [`Category`](domain::Category) and
//! [`Product`](domain::Product), served through one generic set of Axum
//! handlers backed by in-memory repositories.

pub mod config;
pub mod domain;
pub mod web;
