//! polyquery - Answer geometric queries over polygons read from a text file

pub mod commands;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod input;
