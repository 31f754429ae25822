//! Expressive wave synthesis for the determinate active indicator.
//!
//! The active indicator is sampled as a sine polyline once per physical
//! pixel and stroked with round caps. The amplitude is shaped by a
//! smoothstep envelope so the bar is flat near 0% and 100%.

use std::f32::consts::PI;

use glam::Vec2;

use crate::geometry::PxRect;

const FADE_IN_START: f32 = 0.05;
const FADE_IN_END: f32 = 0.10;
const FADE_OUT_START: f32 = 0.90;
const FADE_OUT_END: f32 = 0.95;

/// Upper bound on samples per wave; wider segments are drawn as bars.
const MAX_WAVE_SAMPLES: f32 = 65_536.0;

/// Crest travel per unit of progress.
const PHASE_PER_PROGRESS: f32 = 10.0 * PI;

/// Hermite smoothstep between `edge0` and `edge1`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Wave amplitude at `progress` for a user-configured peak amplitude.
pub fn wave_amplitude(amplitude: f32, progress: f32) -> f32 {
    let fade_in = smoothstep(FADE_IN_START, FADE_IN_END, progress);
    let fade_out = 1.0 - smoothstep(FADE_OUT_START, FADE_OUT_END, progress);
    amplitude * fade_in * fade_out
}

/// Angular frequency (radians per pixel) giving `cycles` periods across
/// `width` pixels.
pub fn wave_frequency(width: f32, cycles: f32) -> f32 {
    2.0 * PI / width * cycles
}

/// A stroked polyline in absolute pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct WavePath {
    /// Samples in drawing order; `points[0]` is the move-to.
    pub points: Vec<Vec2>,
    /// Stroke width in physical pixels.
    pub stroke_width: f32,
}

impl WavePath {
    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Converts the samples into a lyon path (move-to, then line-to).
    pub fn to_lyon_path(&self) -> lyon_path::Path {
        let mut builder = lyon_path::Path::builder().with_svg();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            builder.move_to(lyon_path::math::point(first.x, first.y));
            for p in points {
                builder.line_to(lyon_path::math::point(p.x, p.y));
            }
        }
        builder.build()
    }
}

/// Parameters of one wave synthesis pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Peak amplitude in physical pixels, before the envelope.
    pub amplitude: f32,
    /// Wave cycles across the full track.
    pub cycles: f32,
    /// Width of the whole track in physical pixels. The wavelength is
    /// derived from it so crests keep their spacing as the segment grows.
    pub track_width: f32,
    /// Clamped determinate progress driving the envelope and crest phase.
    pub progress: f32,
}

/// Builds the wave for `rect`, or `None` when the segment is too narrow to
/// show motion and should be filled as a plain bar instead.
pub fn build_wave(rect: PxRect, params: WaveParams) -> Option<WavePath> {
    let stroke_width = rect.height;
    if rect.width <= 2.0 * stroke_width {
        return None;
    }
    let span = (rect.width - stroke_width).floor();
    if !span.is_finite() || span >= MAX_WAVE_SAMPLES {
        return None;
    }

    let amplitude = wave_amplitude(params.amplitude, params.progress);
    let frequency = wave_frequency(params.track_width, params.cycles);
    let phase = params.progress * PHASE_PER_PROGRESS;
    let half_stroke = stroke_width / 2.0;
    let center_y = rect.height / 2.0;
    let steps = span as usize;

    let points = (0..=steps)
        .map(|dx| {
            let x = half_stroke + dx as f32;
            let y = amplitude * (frequency * x + phase).sin() + center_y;
            rect.origin() + Vec2::new(x, y)
        })
        .collect();

    Some(WavePath {
        points,
        stroke_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(0.05, 0.10, 0.0), 0.0);
        assert_eq!(smoothstep(0.05, 0.10, 0.2), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn envelope_is_flat_at_extremes() {
        assert!(wave_amplitude(5.0, 0.0).abs() < 1e-6);
        assert!(wave_amplitude(5.0, 1.0).abs() < 1e-6);
        assert!((wave_amplitude(5.0, 0.5) - 5.0).abs() < 1e-5);
        let ramp = wave_amplitude(5.0, 0.075);
        assert!(ramp > 0.0 && ramp < 5.0);
    }

    #[test]
    fn narrow_segment_falls_back() {
        let params = WaveParams {
            amplitude: 5.0,
            cycles: 10.0,
            track_width: 300.0,
            progress: 0.5,
        };
        assert!(build_wave(PxRect::new(0.0, 0.0, 20.0, 10.0), params).is_none());
        assert!(build_wave(PxRect::new(0.0, 0.0, 20.5, 10.0), params).is_some());
    }

    #[test]
    fn sample_count_and_monotonic_x() {
        let params = WaveParams {
            amplitude: 5.0,
            cycles: 10.0,
            track_width: 300.0,
            progress: 0.5,
        };
        let wave = build_wave(PxRect::new(0.0, 0.0, 150.0, 10.0), params).unwrap();
        assert_eq!(wave.len(), 141);
        assert_eq!(wave.stroke_width, 10.0);
        assert_eq!(wave.points[0].x, 5.0);
        assert_eq!(wave.points[140].x, 145.0);
        assert!(wave.points.windows(2).all(|pair| pair[1].x > pair[0].x));
        assert!(
            wave.points
                .iter()
                .all(|p| (p.y - 5.0).abs() <= 5.0 + 1e-4)
        );
    }

    #[test]
    fn frequency_spreads_cycles_over_track() {
        assert!((wave_frequency(300.0, 10.0) - 2.0 * PI / 30.0).abs() < 1e-6);
        assert!((wave_frequency(120.0, 3.0) - 2.0 * PI / 40.0).abs() < 1e-6);
    }

    #[test]
    fn samples_follow_sine_with_progress_phase() {
        let params = WaveParams {
            amplitude: 5.0,
            cycles: 10.0,
            track_width: 300.0,
            progress: 0.5,
        };
        let wave = build_wave(PxRect::new(0.0, 0.0, 150.0, 10.0), params).unwrap();
        let frequency = 2.0 * PI / 300.0 * 10.0;
        let phase = 0.5 * 10.0 * PI;
        for point in &wave.points {
            let expected = 5.0 * (frequency * point.x + phase).sin() + 5.0;
            assert!(
                (point.y - expected).abs() < 1e-4,
                "y at x={} was {}, expected {}",
                point.x,
                point.y,
                expected
            );
        }
    }

    #[test]
    fn crest_phase_moves_with_progress() {
        let params = |progress| WaveParams {
            amplitude: 2.0,
            cycles: 4.0,
            track_width: 200.0,
            progress,
        };
        let rect = PxRect::new(0.0, 0.0, 100.0, 4.0);
        let first = build_wave(rect, params(0.3)).unwrap().points[0];
        let second = build_wave(rect, params(0.35)).unwrap().points[0];
        let frequency = wave_frequency(200.0, 4.0);
        for (point, progress) in [(first, 0.3_f32), (second, 0.35)] {
            let expected = 2.0 * (frequency * 2.0 + progress * PHASE_PER_PROGRESS).sin() + 2.0;
            assert!((point.y - expected).abs() < 1e-4);
        }
        assert!((first.y - second.y).abs() > 0.1);
    }

    #[test]
    fn oversized_segment_falls_back() {
        let params = WaveParams {
            amplitude: 3.0,
            cycles: 5.0,
            track_width: 1e20,
            progress: 0.5,
        };
        assert!(build_wave(PxRect::new(0.0, 0.0, 1e20, 4.0), params).is_none());
        assert!(build_wave(PxRect::new(0.0, 0.0, f32::INFINITY, 4.0), params).is_none());
    }

    #[test]
    fn fractional_width_floors_sample_count() {
        let params = WaveParams {
            amplitude: 2.0,
            cycles: 3.0,
            track_width: 120.0,
            progress: 0.3,
        };
        let wave = build_wave(PxRect::new(0.0, 0.0, 57.6, 4.0), params).unwrap();
        assert_eq!(wave.len(), 54);
    }

    #[test]
    fn samples_are_offset_by_rect_origin() {
        let params = WaveParams {
            amplitude: 0.0,
            cycles: 1.0,
            track_width: 100.0,
            progress: 0.5,
        };
        let wave = build_wave(PxRect::new(100.0, 20.0, 50.0, 4.0), params).unwrap();
        assert_eq!(wave.points[0], Vec2::new(102.0, 22.0));
    }

    #[test]
    fn lyon_path_has_one_subpath() {
        let params = WaveParams {
            amplitude: 3.0,
            cycles: 2.0,
            track_width: 80.0,
            progress: 0.4,
        };
        let wave = build_wave(PxRect::new(0.0, 0.0, 40.0, 4.0), params).unwrap();
        let path = wave.to_lyon_path();
        let begins = path
            .iter()
            .filter(|event| matches!(event, lyon_path::PathEvent::Begin { .. }))
            .count();
        assert_eq!(begins, 1);
    }
}
