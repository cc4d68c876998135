//! Random number generation for the Monte Carlo pricers.
//!
//! [`PricerRng`] wraps a seeded `StdRng` and turns its uniforms into
//! standard normals with the Box–Muller transform. Every pricing call owns
//! its generator; nothing is shared between calls.

mod prng;

pub use prng::PricerRng;
