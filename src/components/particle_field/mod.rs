//! Pointer-reactive particle field drawn behind the page.
//!
//! Renders a full-viewport canvas of slowly drifting particles:
//! - Particle count proportional to viewport area, reseeded on resize
//! - Toroidal wrap at the viewport edges
//! - Repulsion from the pointer, scaled by each particle's density
//! - Optional faint links between nearby particles
//!
//! # Example
//!
//! ```ignore
//! use antigravity_field::{ParticleFieldCanvas, Theme};
//!
//! view! { <ParticleFieldCanvas theme=Theme::default() /> }
//! ```

mod component;
mod field;
mod particle;
mod pointer;
mod random;
mod render;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use field::{ParticleField, particle_count};
pub use particle::{Particle, seed_particle, update_particle};
pub use pointer::PointerState;
pub use random::random_range;
pub use render::DrawSurface;
pub use theme::Theme;
