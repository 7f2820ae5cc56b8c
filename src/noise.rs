//! Gradient noise for terrain heights.
//!
//! Improved Perlin noise over a fixed permutation table, so every run of the
//! program produces the same terrain. There is no seed: the table is a
//! compile-time constant shared by all callers and never mutated.

use noise::NoiseFn;

use crate::params::FractalParams;

/// Frequency of the first octave
pub const BASE_FREQUENCY: f64 = 4.0;

/// Amplitude of the first octave (cancels out after normalization)
pub const BASE_AMPLITUDE: f64 = 128.0;

/// Ken Perlin's reference permutation
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Permutation repeated twice so `PERM[i + 1]` never needs wrapping
static PERM: [u8; 512] = repeat_table(&PERMUTATION);

const fn repeat_table(src: &[u8; 256]) -> [u8; 512] {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = src[i & 255];
        i += 1;
    }
    out
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the offset with one of 12 cube-edge directions
#[inline]
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Seedless improved Perlin noise
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedPerlin;

impl ImprovedPerlin {
    pub fn new() -> Self {
        Self
    }

    /// Sample raw 3D gradient noise
    ///
    /// Returns value in range [-1, 1]. Integer lattice points return 0.
    pub fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        gradient_noise(x, y, z).clamp(-1.0, 1.0)
    }

    /// Sum octaves of noise and normalize
    ///
    /// Octave `k` is sampled at `BASE_FREQUENCY * 2^k` with amplitude
    /// `BASE_AMPLITUDE * persistence^k`. The weighted sum is divided by the
    /// total amplitude, then mapped from [-1, 1] to [0, 1].
    ///
    /// # Returns
    /// * Value in range [0, 1]
    pub fn fractal(&self, x: f64, y: f64, z: f64, params: &FractalParams) -> f64 {
        ((self.octave_sum(x, y, z, params) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Amplitude-weighted mean of the octaves, in [-1, 1] before remapping
    fn octave_sum(&self, x: f64, y: f64, z: f64, params: &FractalParams) -> f64 {
        let mut total = 0.0;
        let mut frequency = BASE_FREQUENCY;
        let mut amplitude = BASE_AMPLITUDE;
        let mut max_value = 0.0;

        for _ in 0..params.octaves() {
            total += self.sample3(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= params.persistence();
            frequency *= 2.0;
        }

        total / max_value
    }
}

/// Trilinear blend of the eight corner gradients, without range clamping
fn gradient_noise(x: f64, y: f64, z: f64) -> f64 {
    let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());

    // Unit cube containing the point
    let xi = (fx as i32 & 255) as usize;
    let yi = (fy as i32 & 255) as usize;
    let zi = (fz as i32 & 255) as usize;

    // Position inside the cube
    let x = x - fx;
    let y = y - fy;
    let z = z - fz;

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    // Hash the 8 cube corners
    let a = PERM[xi] as usize + yi;
    let aa = PERM[a] as usize + zi;
    let ab = PERM[a + 1] as usize + zi;
    let b = PERM[xi + 1] as usize + yi;
    let ba = PERM[b] as usize + zi;
    let bb = PERM[b + 1] as usize + zi;

    lerp(
        w,
        lerp(
            v,
            lerp(u, grad(PERM[aa], x, y, z), grad(PERM[ba], x - 1.0, y, z)),
            lerp(
                u,
                grad(PERM[ab], x, y - 1.0, z),
                grad(PERM[bb], x - 1.0, y - 1.0, z),
            ),
        ),
        lerp(
            v,
            lerp(
                u,
                grad(PERM[aa + 1], x, y, z - 1.0),
                grad(PERM[ba + 1], x - 1.0, y, z - 1.0),
            ),
            lerp(
                u,
                grad(PERM[ab + 1], x, y - 1.0, z - 1.0),
                grad(PERM[bb + 1], x - 1.0, y - 1.0, z - 1.0),
            ),
        ),
    )
}

impl NoiseFn<f64, 3> for ImprovedPerlin {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.sample3(point[0], point[1], point[2])
    }
}

/// Fractal height function bundled with its octave parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct FractalNoise {
    source: ImprovedPerlin,
    params: FractalParams,
}

impl FractalNoise {
    pub fn new(params: FractalParams) -> Self {
        Self {
            source: ImprovedPerlin,
            params,
        }
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }
}

impl NoiseFn<f64, 3> for FractalNoise {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.source
            .fractal(point[0], point[1], point[2], &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> impl Iterator<Item = (f64, f64, f64)> {
        (0..4000).map(|i| {
            let t = i as f64;
            (t * 0.173 - 40.0, t * 0.0917 + 3.3, (t * 0.311).sin() * 25.0)
        })
    }

    #[test]
    fn test_repeated_table_wraps() {
        for i in 0..256 {
            assert_eq!(PERM[i], PERM[i + 256]);
            assert_eq!(PERM[i], PERMUTATION[i]);
        }
    }

    #[test]
    fn test_sample3_is_deterministic() {
        let noise = ImprovedPerlin::new();
        for (x, y, z) in sample_points().take(200) {
            let a = noise.sample3(x, y, z);
            let b = ImprovedPerlin.sample3(x, y, z);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_sample3_range_and_variation() {
        let noise = ImprovedPerlin::new();
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for (x, y, z) in sample_points() {
            // Checked before the clamp so a broken blend cannot hide behind it
            let v = gradient_noise(x, y, z);
            assert!((-1.0..=1.0).contains(&v), "gradient noise out of range: {}", v);
            assert_eq!(noise.sample3(x, y, z), v);
            min = min.min(v);
            max = max.max(v);
        }
        // A smooth field, not a constant
        assert!(min < -0.2);
        assert!(max > 0.2);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_sample3_reference_value() {
        let v = ImprovedPerlin::new().sample3(3.14, 42.0, 7.0);
        assert!((v - 0.136_919_958_784).abs() < 1e-9, "got {}", v);
    }

    #[test]
    fn test_sample3_zero_on_lattice() {
        let noise = ImprovedPerlin::new();
        assert_eq!(noise.sample3(0.0, 0.0, 0.0), 0.0);
        assert_eq!(noise.sample3(3.0, -7.0, 12.0), 0.0);
    }

    #[test]
    fn test_sample3_tiles_every_256_units() {
        let noise = ImprovedPerlin::new();
        let a = noise.sample3(1.25, 2.5, 0.75);
        let b = noise.sample3(257.25, 2.5, 0.75);
        let c = noise.sample3(1.25, -253.5, 256.75);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_fractal_range() {
        let noise = ImprovedPerlin::new();
        for octaves in [1, 3, 6, 9] {
            for persistence in [0.25, 0.5, 1.0, 1.5] {
                let params = FractalParams::new(octaves, persistence).unwrap();
                let mut min = f64::MAX;
                let mut max = f64::MIN;
                for (x, y, z) in sample_points().step_by(7) {
                    let (x, y, z) = (x * 0.01, y * 0.01, z * 0.01);
                    let mean = noise.octave_sum(x, y, z, &params);
                    assert!(
                        (-1.0..=1.0).contains(&mean),
                        "octave mean out of range: {}",
                        mean
                    );

                    let v = noise.fractal(x, y, z, &params);
                    assert!((v - (mean + 1.0) / 2.0).abs() < 1e-12);
                    min = min.min(v);
                    max = max.max(v);
                }
                assert!(max - min > 0.2, "flat fractal: {}..{}", min, max);
            }
        }
    }

    #[test]
    fn test_fractal_single_octave_identity() {
        let noise = ImprovedPerlin::new();
        let params = FractalParams::new(1, 0.5).unwrap();
        for (x, y, z) in sample_points().take(500) {
            let (x, y, z) = (x * 0.05, y * 0.05, z * 0.05);
            let raw = noise.sample3(x * 4.0, y * 4.0, z * 4.0);
            let expected = ((raw * 128.0) / 128.0 + 1.0) / 2.0;
            assert_eq!(noise.fractal(x, y, z, &params).to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_fractal_ignores_persistence_for_one_octave() {
        let noise = ImprovedPerlin::new();
        let a = noise.fractal(0.3, 0.7, 0.1, &FractalParams::new(1, 0.5).unwrap());
        let b = noise.fractal(0.3, 0.7, 0.1, &FractalParams::new(1, 0.9).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_fn_matches_inherent_methods() {
        let perlin = ImprovedPerlin::new();
        assert_eq!(perlin.get([0.3, 1.7, 2.2]), perlin.sample3(0.3, 1.7, 2.2));

        let fractal = FractalNoise::new(FractalParams::default());
        assert_eq!(
            fractal.get([0.3, 0.6, 0.0]),
            perlin.fractal(0.3, 0.6, 0.0, &FractalParams::default())
        );
    }
}
