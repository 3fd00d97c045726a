pub mod axis;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod export;
pub mod field;
pub mod grid;
pub mod interpolate;
pub mod io;
pub mod points;
pub mod table;
pub mod view;
