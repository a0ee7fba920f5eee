use starfill::{instant::Instant, AppController, Settings};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::{Error, Frame, Presenter};

/// Opens the star counter window and runs it until closed.
///
/// Only returns if startup fails; there is no retry.
pub fn run(settings: Settings) -> Result<(), Error> {
    let mut controller = AppController::new(&settings)?;
    let mut frame = Frame::new(&settings)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Star Counter")
        .with_inner_size(PhysicalSize::new(frame.width(), frame.height()))
        .with_resizable(false)
        .build(&event_loop)?;
    let mut presenter = Presenter::new(window)?;

    log::info!(
        "Counting {} stars over {:?} at {} fps",
        settings.star_count,
        settings.duration,
        settings.frame_rate
    );
    controller.start(Instant::now());

    event_loop.run(move |event, _, control_flow| match event {
        // Any wakeup may be late for the pending tick.
        Event::NewEvents(_) => {
            if controller.advance(Instant::now()) {
                presenter.window().request_redraw();
            }
        }
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                controller.restart(Instant::now());
                presenter.window().request_redraw();
            }
            _ => {}
        },
        Event::RedrawRequested(_) => {
            frame.compose(&controller.stars(), &controller.bar());
            presenter.present(&frame);
        }
        Event::MainEventsCleared => {
            if matches!(*control_flow, ControlFlow::ExitWithCode(_)) {
                return;
            }
            *control_flow = match controller.next_deadline() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            };
        }
        _ => {}
    })
}
