// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod db;
pub mod models;
pub mod session;
pub mod stores;
pub mod utils;
pub mod commands;
