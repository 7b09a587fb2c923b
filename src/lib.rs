//! Cube-coordinate hex grids: conversion to and from pixel space, and a bounded map
//! of terrain tiles.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod config;
pub mod geometry;

pub use geometry::{Direction, Hex, Layout, Map, Orientation, Point};
