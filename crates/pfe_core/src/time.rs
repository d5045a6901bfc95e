use std::time::Instant;

const FPS_SAMPLE_COUNT: usize = 60;
const SLOW_FRAME_SECS: f64 = 0.25;

/// Wall-clock timing for the frame loop, measured once per iteration.
pub struct FrameClock {
    last_instant: Option<Instant>,
    pub elapsed: f64,
    pub frame_count: u64,

    fps_samples: [f64; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: None,
            elapsed: 0.0,
            frame_count: 0,
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.tick(Instant::now());
    }

    fn tick(&mut self, now: Instant) {
        // The first frame has nothing to measure against.
        self.elapsed = match self.last_instant {
            Some(last) => now.duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last_instant = Some(now);
        self.frame_count += 1;

        if self.elapsed > SLOW_FRAME_SECS {
            log::warn!("Frame took {:.1}ms", self.elapsed * 1000.0);
        }

        if self.frame_count > 1 {
            self.fps_samples[self.fps_sample_index] = self.elapsed;
            self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
            let avg_dt: f64 = self.fps_samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
            self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
