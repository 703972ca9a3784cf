use image::{Luma, Primitive};

use crate::error::RegionGrowingError;
use crate::regiongrow::frontier::Frontier;
use crate::regiongrow::status_mask::{PixelStatus, StatusMask};
use crate::utils::{in_bounds, neighbors4};
use crate::Image;

/// Why a region growing call stopped absorbing pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The best remaining candidate differed from the region mean by at
    /// least the maximum distance
    DistanceExceeded,
    /// Every pixel of the image was absorbed into the region
    ImageCovered,
    /// No candidates were left although neither the distance nor the
    /// size limit had been reached
    ///
    /// This is a normal early termination, not a failure: the mask
    /// accumulated so far is returned unchanged.
    FrontierExhausted,
}

/// Result of a region growing call
///
/// Owns the binary membership mask together with the final state of the
/// running region statistics at the moment growth stopped.
#[derive(Debug, Clone)]
pub struct RegionGrowth {
    mask: Image<Luma<u8>>,
    mean: f32,
    size: usize,
    stop_reason: StopReason,
}

impl RegionGrowth {
    /// Binary membership mask; 255 marks pixels inside the region
    #[must_use]
    pub fn mask(&self) -> &Image<Luma<u8>> {
        &self.mask
    }

    /// Consumes the report and returns only the membership mask
    #[must_use]
    pub fn into_mask(self) -> Image<Luma<u8>> {
        self.mask
    }

    /// Number of pixels absorbed into the running statistics
    ///
    /// The candidate that finally failed the distance test is counted
    /// here as well, so this can exceed the number of accepted pixels in
    /// the mask by one.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Final value of the running region mean
    #[must_use]
    pub const fn mean(&self) -> f32 {
        self.mean
    }

    /// Which of the three stop conditions ended the growth
    #[must_use]
    pub const fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }
}

/// Seeded region growing over single-channel images
///
/// Starting from a seed pixel, the region repeatedly absorbs the
/// frontier candidate whose intensity is closest to the running region
/// mean, until the best candidate differs from the mean by at least
/// `max_distance` or the whole image is covered.
pub trait RegionGrowingExt {
    /// Error type produced when the inputs are rejected
    type Error;

    /// Grows a region from the seed pixel and returns the full report
    ///
    /// # Arguments
    ///
    /// * `seed_x` - X coordinate of the seed pixel
    /// * `seed_y` - Y coordinate of the seed pixel
    /// * `max_distance` - Intensity difference at which growth stops
    ///
    /// # Returns
    ///
    /// The binary membership mask together with the final region
    /// statistics and the stop condition
    ///
    /// # Errors
    ///
    /// * The image has zero width or height
    /// * The seed lies outside the image bounds
    /// * `max_distance` is negative or not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Luma;
    /// use regiongrow::{Image, RegionGrowingExt, StopReason};
    ///
    /// # fn example() -> Result<(), regiongrow::RegionGrowingError> {
    /// let image: Image<Luma<u8>> = Image::from_pixel(8, 8, Luma([40]));
    /// let growth = image.grow_region(3, 3, 1.0)?;
    ///
    /// assert_eq!(growth.stop_reason(), StopReason::ImageCovered);
    /// assert_eq!(growth.mask().get_pixel(0, 0)[0], 255);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn grow_region(
        &self,
        seed_x: u32,
        seed_y: u32,
        max_distance: f32,
    ) -> Result<RegionGrowth, Self::Error>;

    /// Grows a region and returns only the binary membership mask
    ///
    /// Convenience wrapper around [`grow_region`](Self::grow_region) for
    /// callers that do not need the statistics report.
    fn grow_region_mask(
        &self,
        seed_x: u32,
        seed_y: u32,
        max_distance: f32,
    ) -> Result<Image<Luma<u8>>, Self::Error> {
        self.grow_region(seed_x, seed_y, max_distance)
            .map(RegionGrowth::into_mask)
    }
}

impl<S> RegionGrowingExt for Image<Luma<S>>
where
    S: Primitive + Into<f32>,
{
    type Error = RegionGrowingError;

    fn grow_region(
        &self,
        seed_x: u32,
        seed_y: u32,
        max_distance: f32,
    ) -> Result<RegionGrowth, Self::Error> {
        let (width, height) = self.dimensions();

        if width == 0 || height == 0 {
            return Err(RegionGrowingError::EmptyImage);
        }

        if !in_bounds(seed_x, seed_y, width, height) {
            return Err(RegionGrowingError::SeedOutOfBounds {
                seed_x,
                seed_y,
                width,
                height,
            });
        }

        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(RegionGrowingError::InvalidMaxDistance { max_distance });
        }

        Ok(RegionGrower::new(self, seed_x, seed_y).grow(max_distance))
    }
}

/// Growth state for a single call: the status grid, the frontier bag and
/// the running statistics
struct RegionGrower<'a, S: Primitive> {
    image: &'a Image<Luma<S>>,
    status: StatusMask,
    frontier: Frontier,
    seed: (u32, u32),
    mean: f32,
    size: usize,
    last_distance: f32,
}

impl<'a, S> RegionGrower<'a, S>
where
    S: Primitive + Into<f32>,
{
    /// Sets up the initial state: the seed is accepted up front and the
    /// running mean starts at its intensity
    fn new(image: &'a Image<Luma<S>>, seed_x: u32, seed_y: u32) -> Self {
        let (width, height) = image.dimensions();
        let mut status = StatusMask::new(width, height);
        status.set(seed_x, seed_y, PixelStatus::Accepted);

        Self {
            image,
            status,
            frontier: Frontier::new(),
            seed: (seed_x, seed_y),
            mean: intensity_at(image, seed_x, seed_y),
            size: 1,
            last_distance: 0.0,
        }
    }

    /// Runs the growth loop to completion and reduces the status grid to
    /// the binary membership mask
    fn grow(mut self, max_distance: f32) -> RegionGrowth {
        let total_pixels = self.status.total_pixels();
        let (mut x, mut y) = self.seed;

        let stop_reason = loop {
            if self.last_distance >= max_distance {
                break StopReason::DistanceExceeded;
            }
            if self.size >= total_pixels {
                break StopReason::ImageCovered;
            }

            self.expand_frontier(x, y);

            let Some(index) = self.frontier.closest_to(self.mean) else {
                break StopReason::FrontierExhausted;
            };
            let entry = self.frontier.swap_remove(index);

            self.last_distance = (entry.intensity - self.mean).abs();
            self.absorb(entry.intensity);

            // A candidate that fails the distance test stays a
            // candidate; it has already been folded into the statistics
            // above either way.
            if self.last_distance < max_distance {
                self.status.set(entry.x, entry.y, PixelStatus::Accepted);
                (x, y) = (entry.x, entry.y);
            }
        };

        RegionGrowth {
            mask: self.status.into_binary_mask(),
            mean: self.mean,
            size: self.size,
            stop_reason,
        }
    }

    /// Pushes every in-bounds, still unvisited 4-neighbor of (x, y) onto
    /// the frontier and marks it as a candidate
    fn expand_frontier(&mut self, x: u32, y: u32) {
        let width = self.status.width();
        let height = self.status.height();

        for (nx, ny) in neighbors4(x, y, width, height) {
            if self.status.get(nx, ny) == PixelStatus::Unvisited {
                self.frontier.push(nx, ny, intensity_at(self.image, nx, ny));
                self.status.set(nx, ny, PixelStatus::Candidate);
            }
        }
    }

    /// Folds a selected candidate into the running statistics
    ///
    /// Not a textbook running mean: the denominator runs one past the
    /// already incremented size, damping each new sample. Every later
    /// acceptance decision depends on this exact recurrence.
    fn absorb(&mut self, intensity: f32) {
        self.size += 1;
        self.mean = (self.mean * self.size as f32 + intensity) / (self.size as f32 + 1.0);
    }
}

fn intensity_at<S>(image: &Image<Luma<S>>, x: u32, y: u32) -> f32
where
    S: Primitive + Into<f32>,
{
    image.get_pixel(x, y)[0].into()
}
