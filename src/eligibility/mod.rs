// SPDX-License-Identifier: MIT

pub mod criteria;
pub mod loader;
pub mod path;
pub mod service;
