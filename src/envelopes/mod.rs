//! Envelope shapes for fades.

mod shape;

pub use shape::FadeShape;
