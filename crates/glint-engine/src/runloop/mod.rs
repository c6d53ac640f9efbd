//! The frame loop.
//!
//! Cooperative and single-threaded: every GPU and windowing call happens on
//! the calling thread, in program order, with no frame-rate limiting and no
//! cancellation beyond the context's close latch.

use crate::context::GraphicsContext;
use crate::device::SurfaceErrorAction;
use crate::error::Error;
use crate::mesh::StaticMesh;
use crate::shader::ShaderProgram;
use crate::time::FrameClock;

/// Frames between trace-level timing reports.
const FRAME_STATS_INTERVAL: u64 = 300;

/// Drives the fixed per-frame sequence until the context requests close.
pub struct RenderLoop {
    clear_color: wgpu::Color,
}

impl RenderLoop {
    pub fn new(clear_color: wgpu::Color) -> Self {
        Self { clear_color }
    }

    /// Runs the loop: poll events; stop if close was latched; clear to the
    /// configured color; bind the program; draw the mesh; present.
    ///
    /// Every iteration polls, and every drawn frame presents exactly once.
    /// A transient surface error skips the draw for that iteration (nothing
    /// partial is presented); surface memory exhaustion ends the loop with
    /// [`Error::GpuAllocation`]. A normal close returns `Ok(())`.
    pub fn run(
        &self,
        ctx: &mut GraphicsContext,
        program: &ShaderProgram,
        mesh: &StaticMesh,
    ) -> Result<(), Error> {
        let mut clock = FrameClock::new();
        log::info!("entering render loop");

        loop {
            ctx.poll_events();
            if ctx.should_close() {
                log::info!("close requested; leaving render loop");
                return Ok(());
            }

            let mut frame = match ctx.begin_frame() {
                Ok(frame) => frame,
                Err(err) => match ctx.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => continue,
                    SurfaceErrorAction::Fatal => {
                        return Err(Error::GpuAllocation {
                            reason: "surface memory exhausted".to_string(),
                        });
                    }
                },
            };

            {
                let mut pass = frame.begin_pass(self.clear_color);
                program.bind(&mut pass);
                mesh.draw(&mut pass);
            }

            ctx.present(frame);

            let ft = clock.tick();
            if ft.frame_index % FRAME_STATS_INTERVAL == 0 {
                log::trace!(
                    "frame {} presented, {:.2} ms since previous",
                    ft.frame_index,
                    f64::from(ft.dt) * 1000.0
                );
            }
        }
    }
}
