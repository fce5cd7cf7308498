pub mod compute;
pub mod controls;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod rules;
