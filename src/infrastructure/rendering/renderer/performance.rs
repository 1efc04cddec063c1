use super::*;

/// Frames kept for the rolling average.
const FPS_WINDOW: usize = 60;

impl WebGpuRenderer {
    /// Record the interval since the previous frame.
    pub(super) fn track_frame_time(&mut self) {
        let Some(now) = web_sys::window().and_then(|w| w.performance()).map(|p| p.now()) else {
            return;
        };
        if self.last_frame_time > 0.0 {
            let delta = now - self.last_frame_time;
            if delta > 0.0 {
                self.fps_log.push_back(1000.0 / delta);
                if self.fps_log.len() > FPS_WINDOW {
                    self.fps_log.pop_front();
                }
            }
        }
        self.last_frame_time = now;
    }

    /// Rolling average over the last frames, 0 before the second frame.
    pub fn average_fps(&self) -> f64 {
        if self.fps_log.is_empty() {
            0.0
        } else {
            self.fps_log.iter().sum::<f64>() / self.fps_log.len() as f64
        }
    }
}
