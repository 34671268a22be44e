//! UI components: the particle background and the page behaviours around it.

pub mod page;
pub mod particle_field;
