// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod catalogue;
pub mod favourites;

#[cfg(test)]
pub(crate) mod testing;
