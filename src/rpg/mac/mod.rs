// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustpwgen
// Module: mac (message authentication codes)
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Keyed hash stage of the derivation pipeline.
//! Submodules provide the algorithm registry, the HMAC executors, and
//! helpers that drive an executor and render its digest.

pub mod executor;
pub mod hmac;
pub mod registry;
