//! Tick loop around a round controller.

use std::{io::Write, thread};

use log::{debug, info};
use pour_combien::{
    AnimationBank, ButtonPanel, FrameAnimation, Phase, RoundController, RoundEvent, RoundView,
};
use serde::Serialize;

use crate::{config::SimConfig, script::TickInput};

/// What one tick produced.
#[derive(Debug, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub view: RoundView,
    pub events: Vec<RoundEvent>,
}

pub struct Simulator {
    panel: ButtonPanel,
    controller: RoundController<ButtonPanel, AnimationBank<FrameAnimation>>,
    config: SimConfig,
    ticks: u64,
    rounds: u64,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        let panel = ButtonPanel::new();
        let bank = AnimationBank::from_frames(&config.animations);
        let controller = RoundController::new(panel.clone(), bank);
        Self {
            panel,
            controller,
            config,
            ticks: 0,
            rounds: 0,
        }
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Rounds that reached the winner display.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        self.controller.view()
    }

    /// Whether the tick budget is spent.
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.config.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    /// Press the buttons, run one tick and collect what happened.
    pub fn tick(&mut self, input: TickInput) -> TickReport {
        input.apply(&self.panel);
        self.controller.step();
        self.ticks += 1;

        let events: Vec<_> = self.controller.drain_events().into_iter().collect();
        for event in &events {
            if let RoundEvent::WinnerResolved(winner) = event {
                self.rounds += 1;
                info!("round {} over: {winner}", self.rounds);
            }
        }
        debug!("tick {}: {}", self.ticks, self.controller.state());

        TickReport {
            tick: self.ticks,
            view: self.controller.view(),
            events,
        }
    }

    /// Run ticks from `inputs` until they run out or the budget is spent,
    /// writing reports to `out`.
    ///
    /// # Errors
    ///
    /// Fails on a bad input line or when `out` can't be written.
    pub fn run<I, W>(&mut self, inputs: I, out: &mut W) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = anyhow::Result<TickInput>>,
        W: Write,
    {
        let mut inputs = inputs.into_iter();
        // Checked before reading so a spent budget never waits on stdin.
        while !self.exhausted() {
            let Some(input) = inputs.next() else {
                break;
            };
            let report = self.tick(input?);
            self.write_report(&report, out)?;
            if !self.config.tick_interval.is_zero() {
                thread::sleep(self.config.tick_interval);
            }
        }
        if self.exhausted() {
            info!("tick budget of {} spent", self.ticks);
        }
        out.flush()?;
        Ok(())
    }

    fn write_report<W: Write>(&self, report: &TickReport, out: &mut W) -> anyhow::Result<()> {
        if self.config.json {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
            return Ok(());
        }

        for event in &report.events {
            writeln!(out, "{:>5} | {event}", report.tick)?;
        }
        if report.view.phase == Phase::ShowWinner
            && report
                .events
                .iter()
                .any(|event| matches!(event, RoundEvent::WinnerResolved(_)))
        {
            writeln!(out, "{:>5} | {}", report.tick, report.view)?;
        }
        Ok(())
    }
}
