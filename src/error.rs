use thiserror::Error;

/// Error type for seeded region growing operations
///
/// All inputs are validated before any growth state is allocated or
/// mutated, so receiving an error means the call had no effect.
///
/// Running out of frontier candidates is deliberately not represented
/// here: it terminates growth early with the mask accumulated so far and
/// is reported through `StopReason::FrontierExhausted` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionGrowingError {
    /// The input image has zero width or height
    #[error("Image dimensions must be non-zero")]
    EmptyImage,

    /// Seed coordinates fall outside the image bounds
    ///
    /// Growth starts at the seed pixel, so the seed must address a real
    /// pixel of the image.
    #[error("Seed ({seed_x}, {seed_y}) is outside image bounds {width}x{height}")]
    SeedOutOfBounds {
        seed_x: u32,
        seed_y: u32,
        width: u32,
        height: u32,
    },

    /// The intensity-distance threshold is negative or not finite
    #[error("Maximum intensity distance must be finite and non-negative, got {max_distance}")]
    InvalidMaxDistance { max_distance: f32 },
}
