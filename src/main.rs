//! Headless demo: random table, a scripted slingshot and a click, with a
//! separate "render" thread reading published frames.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use pseudo_billiards::{Frame, FrameBuffer, InputLatch, Simulation};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

const TICK: Duration = Duration::from_micros(16_667);
const RUN_FOR: Duration = Duration::from_secs(4);

fn main() -> Result<(), pseudo_billiards::Error> {
    let mut simulation = Simulation::random(WIDTH, HEIGHT)?;
    simulation.on_ball_clicked(|event| {
        println!(
            "clicked ball {} at {:.1?} (released at {:.1?})",
            event.ball.id.0, event.pressed, event.released
        );
    });

    let latch = Arc::new(InputLatch::new());
    let frames = FrameBuffer::new();
    let running = Arc::new(AtomicBool::new(true));

    frames.publish(simulation.frame());

    let renderer = {
        let frames = frames.clone();
        let running = Arc::clone(&running);
        thread::spawn(move || render_loop(&frames, &running))
    };

    let pointer = {
        let frames = frames.clone();
        let latch = Arc::clone(&latch);
        thread::spawn(move || scripted_pointer(&frames, &latch))
    };

    let started = Instant::now();
    let mut next = started;
    while started.elapsed() < RUN_FOR {
        simulation.update(latch.sample(), 1.0);
        frames.publish(simulation.frame());

        next += TICK;
        if let Some(wait) = next.checked_duration_since(Instant::now()) {
            thread::sleep(wait);
        }
    }

    running.store(false, Ordering::Relaxed);
    let _ = pointer.join();
    let _ = renderer.join();

    print_frame(&simulation.frame());
    Ok(())
}

fn render_loop(frames: &FrameBuffer, running: &AtomicBool) {
    let mut last_report = Instant::now();
    let mut drawn = 0u32;

    while running.load(Ordering::Relaxed) {
        let frame = frames.latest();
        drawn += 1;

        if last_report.elapsed() >= Duration::from_secs(1) {
            let energy: f64 = frame.balls.iter().map(|b| b.velocity.length_squared()).sum();
            println!(
                "tick {:>4} | frames drawn {drawn:>3} | balls {} | kinetic {energy:.1}{}",
                frame.tick,
                frame.balls.len(),
                if frame.holding.is_some() { " | holding" } else { "" },
            );
            last_report = Instant::now();
            drawn = 0;
        }

        thread::sleep(TICK);
    }
}

/// Grab the first ball and sling it, then click the last one.
fn scripted_pointer(frames: &FrameBuffer, latch: &InputLatch) {
    thread::sleep(Duration::from_millis(500));

    let frame = frames.latest();
    let Some(first) = frame.balls.first().copied() else {
        return;
    };

    latch.move_to(first.position.x, first.position.y);
    latch.press();
    thread::sleep(TICK * 3);
    for step in 1..=12 {
        latch.move_to(first.position.x - 5.0 * step as f64, first.position.y);
        thread::sleep(TICK);
    }
    latch.release();

    thread::sleep(Duration::from_millis(800));

    let frame = frames.latest();
    let Some(last) = frame.balls.last().copied() else {
        return;
    };
    latch.move_to(last.position.x, last.position.y);
    latch.press();
    thread::sleep(TICK * 3);
    latch.release();
}

fn print_frame(frame: &Frame) {
    println!("final state after {} ticks:", frame.tick);
    for ball in &frame.balls {
        println!(
            "  ball {:>2} r={:>4.1} pos=({:>6.1}, {:>6.1}) vel=({:>6.2}, {:>6.2}) color={:?}",
            ball.id.0,
            ball.radius,
            ball.position.x,
            ball.position.y,
            ball.velocity.x,
            ball.velocity.y,
            ball.color,
        );
    }
}
