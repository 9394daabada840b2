//! Centralized defaults for maze generation and world-space export.
//!
//! Per-module constants (carve entry cell, phase ids) remain in their
//! respective modules as the single source of truth.

// =====================================================
// Dimensions
// =====================================================

/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 10;

// =====================================================
// World Space
// =====================================================

/// Edge length of one cell in world units
pub const DEFAULT_CELL_SIZE: f32 = 10.0;

/// Height above the floor at which entities and the goal zone are placed
pub const DEFAULT_SPAWN_HEIGHT: f32 = 1.0;
