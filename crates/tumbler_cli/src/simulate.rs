//! Headless picker sessions

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::time::{Duration, Instant};
use tumbler_animation::FrameClock;
use tumbler_core::RawInput;
use tumbler_picker::{DatePicker, DateValue, Field, PickerEvent};

use crate::config::{SessionConfig, TumblerConfig};

/// Outcome of a simulated session
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub value: DateValue,
    pub date: Option<NaiveDate>,
    pub settled: bool,
    pub frames: usize,
    pub events: Vec<PickerEvent>,
}

/// Drives a [`DatePicker`] with a simulated clock
pub struct Simulation {
    picker: DatePicker,
    session: SessionConfig,
    clock: FrameClock,
    epoch: Instant,
    /// Simulated time since `epoch`, in milliseconds
    now: f64,
    frames: usize,
    events: Vec<PickerEvent>,
}

impl Simulation {
    pub fn new(config: &TumblerConfig) -> Self {
        let epoch = Instant::now();
        let mut clock = FrameClock::new();
        clock.tick_at(epoch);
        Self {
            picker: DatePicker::new(config.picker_options()),
            session: config.session.clone(),
            clock,
            epoch,
            now: 0.0,
            frames: 0,
            events: Vec::new(),
        }
    }

    /// Page every slot toward `date` and let them settle
    pub fn navigate(&mut self, date: NaiveDate) {
        if !self.picker.set_current(date) {
            tracing::warn!("{} is outside the selectable range", date);
        }
        self.run_frames(self.session.frames);
    }

    /// Drag `distance` px over `duration` ms on `field`, release, and let it settle.
    ///
    /// Positive distances move the finger up, paging the content forward.
    pub fn flick(&mut self, field: Field, distance: f32, duration: f64) {
        const STEPS: u32 = 4;
        let duration = duration.max(0.0);
        let [width, height] = self.picker.options().size;
        let x = width / 6.0;
        let start = height / 2.0;
        let id = 1;

        tracing::info!("Flicking {} by {}px over {}ms", field, distance, duration);
        self.picker.handle_input(
            field,
            RawInput::TouchStart {
                id,
                position: [x, start],
                timestamp: self.now,
            },
        );
        for step in 1..=STEPS {
            let progress = step as f32 / STEPS as f32;
            self.picker.handle_input(
                field,
                RawInput::TouchMove {
                    id,
                    position: [x, start - distance * progress],
                    timestamp: self.now + duration * f64::from(progress),
                },
            );
        }
        self.now += duration;
        self.picker.handle_input(
            field,
            RawInput::TouchEnd {
                id,
                position: [x, start - distance],
                timestamp: self.now,
            },
        );
        self.run_frames(self.session.frames);
    }

    /// Advance `count` frames, collecting picker events
    pub fn run_frames(&mut self, count: usize) {
        let interval = f64::from(self.session.frame_interval.max(0.0));
        for _ in 0..count {
            self.now += interval;
            let dt = self
                .clock
                .tick_at(self.epoch + Duration::from_secs_f64(self.now / 1000.0));
            self.picker.poll_input(self.now);
            self.picker.frame(dt);
            self.events.extend(self.picker.drain_events());
            self.frames += 1;
        }
    }

    pub fn report(&self) -> Report {
        Report {
            value: self.picker.value(),
            date: self.picker.date(),
            settled: self.picker.is_settled(),
            frames: self.frames,
            events: self.events.clone(),
        }
    }
}

/// Run the configured session: navigate, then flick if requested
pub fn run(config: &TumblerConfig) -> Result<Report> {
    let session = &config.session;
    let mut simulation = Simulation::new(config);

    if let Some(date) = &session.date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid session date '{}'", date))?;
        simulation.navigate(date);
    }

    if session.flick != 0.0 {
        simulation.flick(session.field, session.flick, session.flick_duration);
    }

    Ok(simulation.report())
}
