//! End-to-end round flow integration tests.
//!
//! Drives complete rounds through the public controller, pressing buttons
//! between ticks the way the device's input side would.

use pour_combien::{
    Animation, AnimationBank, AnimationConfig, AnimationSlots, AnimationState, Button, ButtonPanel,
    ButtonSource, FrameAnimation, Outcome, Phase, RoundController, RoundEvent,
};

type Controller<S> = RoundController<ButtonPanel, S>;

fn headless() -> (ButtonPanel, Controller<AnimationBank<FrameAnimation>>) {
    let panel = ButtonPanel::new();
    let controller = RoundController::new(panel.clone(), AnimationBank::new());
    (panel, controller)
}

fn press(panel: &ButtonPanel, increments: u32, decrements: u32, validate: bool) {
    panel.press_n(Button::Increment, increments);
    panel.press_n(Button::Decrement, decrements);
    if validate {
        panel.press(Button::Validate);
    }
}

fn assert_counters_cleared(panel: &ButtonPanel) {
    for button in Button::ALL {
        assert_eq!(panel.press_count(button), 0, "{button} counter not reset");
    }
}

/// Tick until the controller leaves `phase`, giving up after `limit` ticks.
fn step_until_past<S: AnimationSlots>(controller: &mut Controller<S>, phase: Phase, limit: usize) {
    for _ in 0..limit {
        if controller.phase() != phase {
            return;
        }
        controller.step();
    }
    assert_ne!(controller.phase(), phase, "stuck in {phase}");
}

/// Play a whole round from CollectMaxBet and return the winner.
fn play_round<S: AnimationSlots>(
    panel: &ButtonPanel,
    controller: &mut Controller<S>,
    max_bet: u32,
    host_bet: u32,
    player_bet: u32,
) -> Outcome {
    assert_eq!(controller.phase(), Phase::CollectMaxBet);
    press(panel, max_bet, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectHostBet);
    press(panel, host_bet, 0, true);
    controller.step();
    press(panel, player_bet, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::Resolving);
    step_until_past(controller, Phase::Resolving, 1_000);
    assert_eq!(controller.phase(), Phase::ShowWinner);
    controller.current_winner()
}

// ============================================================================
// Bet Collection
// ============================================================================

#[test]
fn test_reference_scenario() {
    let (panel, mut controller) = headless();
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectMaxBet);

    press(&panel, 5, 2, true);
    controller.step();
    assert_eq!(controller.current_max_bet(), 3);
    assert_eq!(controller.phase(), Phase::CollectHostBet);

    // Over the cap: validate consumed, phase kept.
    press(&panel, 4, 0, true);
    controller.step();
    assert_eq!(controller.current_host_bet(), 4);
    assert_eq!(controller.phase(), Phase::CollectHostBet);
    assert_counters_cleared(&panel);

    press(&panel, 2, 0, true);
    controller.step();
    assert_eq!(controller.current_host_bet(), 2);
    assert_eq!(controller.phase(), Phase::CollectPlayerBet);
}

#[test]
fn test_inverted_count_leaves_bet_unchanged() {
    let (panel, mut controller) = headless();
    controller.step();

    press(&panel, 3, 0, false);
    controller.step();
    assert_eq!(controller.current_max_bet(), 3);

    // Counters now read 3 up, 5 down.
    press(&panel, 0, 5, false);
    controller.step();
    assert_eq!(controller.current_max_bet(), 3);
    assert_eq!(panel.press_count(Button::Increment), 0);
    assert_eq!(panel.press_count(Button::Decrement), 0);

    let events = controller.drain_events();
    assert!(events.contains(&RoundEvent::InputDiscarded {
        phase: Phase::CollectMaxBet
    }));
}

#[test]
fn test_inverted_count_keeps_validate_pending_until_checked() {
    let (panel, mut controller) = headless();
    controller.step();
    press(&panel, 2, 0, false);
    controller.step();

    // Inverted sample with a validate: bet stays at 2 and is accepted.
    press(&panel, 0, 3, true);
    controller.step();
    assert_eq!(controller.current_max_bet(), 2);
    assert_eq!(controller.phase(), Phase::CollectHostBet);
    assert_counters_cleared(&panel);
}

#[test]
fn test_max_bet_below_two_never_advances() {
    let (panel, mut controller) = headless();
    controller.step();

    for presses in [0, 1] {
        press(&panel, presses, 0, true);
        controller.step();
        assert_eq!(controller.phase(), Phase::CollectMaxBet);
        assert_counters_cleared(&panel);
    }

    press(&panel, 2, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectHostBet);
}

#[test]
fn test_zero_bets_are_rejected() {
    let (panel, mut controller) = headless();
    controller.step();
    press(&panel, 4, 0, true);
    controller.step();

    press(&panel, 0, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectHostBet);

    press(&panel, 4, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectPlayerBet);

    press(&panel, 2, 2, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectPlayerBet);

    press(&panel, 5, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectPlayerBet);

    press(&panel, 4, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::Resolving);
}

#[test]
fn test_bet_follows_presses_across_ticks() {
    let (panel, mut controller) = headless();
    controller.step();
    for expected in 1..=6 {
        panel.press(Button::Increment);
        controller.step();
        assert_eq!(controller.current_max_bet(), expected);
    }
    panel.press(Button::Decrement);
    controller.step();
    assert_eq!(controller.current_max_bet(), 5);
}

// ============================================================================
// Winner Resolution and Reset
// ============================================================================

#[test]
fn test_narrowest_range_winners() {
    let (panel, mut controller) = headless();
    controller.step();

    assert_eq!(play_round(&panel, &mut controller, 2, 1, 1), Outcome::Host);
    controller.step();
    assert_eq!(play_round(&panel, &mut controller, 2, 1, 2), Outcome::Player);
}

#[test]
fn test_wide_range_winners() {
    let (panel, mut controller) = headless();
    controller.step();

    assert_eq!(play_round(&panel, &mut controller, 5, 3, 3), Outcome::Host);
    controller.step();
    assert_eq!(play_round(&panel, &mut controller, 5, 3, 4), Outcome::None);
}

#[test]
fn test_round_resets_after_show_winner() {
    let (panel, mut controller) = headless();
    controller.step();
    assert_eq!(play_round(&panel, &mut controller, 2, 2, 2), Outcome::Host);

    controller.step();
    assert_eq!(controller.phase(), Phase::CollectMaxBet);
    assert_eq!(controller.current_max_bet(), 0);
    assert_eq!(controller.current_host_bet(), 0);
    assert_eq!(controller.current_player_bet(), 0);
    assert_eq!(controller.current_winner(), Outcome::None);
}

#[test]
fn test_round_events_in_order() {
    let (panel, mut controller) = headless();
    controller.step();
    controller.drain_events();
    play_round(&panel, &mut controller, 2, 1, 2);
    controller.step();

    let phase_changes: Vec<_> = controller
        .drain_events()
        .into_iter()
        .filter(|event| {
            matches!(
                event,
                RoundEvent::PhaseChanged { .. }
                    | RoundEvent::WinnerResolved(_)
                    | RoundEvent::RoundReset
            )
        })
        .collect();
    assert_eq!(
        phase_changes,
        vec![
            RoundEvent::PhaseChanged {
                from: Phase::CollectMaxBet,
                to: Phase::CollectHostBet
            },
            RoundEvent::PhaseChanged {
                from: Phase::CollectHostBet,
                to: Phase::CollectPlayerBet
            },
            RoundEvent::PhaseChanged {
                from: Phase::CollectPlayerBet,
                to: Phase::Resolving
            },
            RoundEvent::WinnerResolved(Outcome::Player),
            RoundEvent::PhaseChanged {
                from: Phase::Resolving,
                to: Phase::ShowWinner
            },
            RoundEvent::RoundReset,
            RoundEvent::PhaseChanged {
                from: Phase::ShowWinner,
                to: Phase::CollectMaxBet
            },
        ]
    );
}

// ============================================================================
// Animations
// ============================================================================

#[test]
fn test_start_is_played_once() {
    let panel = ButtonPanel::new();
    let bank = AnimationBank::from_frames(&AnimationConfig::uniform(1));
    let mut controller = RoundController::new(panel.clone(), bank);

    controller.step();
    assert_eq!(controller.phase(), Phase::CollectMaxBet);
    play_round(&panel, &mut controller, 3, 1, 1);
    step_until_past(&mut controller, Phase::ShowWinner, 10);
    assert_eq!(controller.phase(), Phase::CollectMaxBet);

    let rendered = controller
        .animations()
        .get(Phase::Start)
        .map(FrameAnimation::rendered);
    assert_eq!(rendered, Some(1));
}

#[test]
fn test_phases_wait_for_animations() {
    let panel = ButtonPanel::new();
    let bank = AnimationBank::new()
        .with_slot(Phase::Resolving, FrameAnimation::new(4))
        .with_slot(Phase::ShowWinner, FrameAnimation::new(2));
    let mut controller = RoundController::new(panel.clone(), bank);
    controller.step();

    press(&panel, 2, 0, true);
    controller.step();
    press(&panel, 1, 0, true);
    controller.step();
    press(&panel, 1, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::Resolving);

    for _ in 0..3 {
        controller.step();
        assert_eq!(controller.phase(), Phase::Resolving);
        assert_eq!(controller.current_winner(), Outcome::None);
    }
    controller.step();
    assert_eq!(controller.phase(), Phase::ShowWinner);
    assert_eq!(controller.current_winner(), Outcome::Host);
    assert_eq!(
        controller.animations().query(Phase::Resolving),
        AnimationState::Stopped
    );

    controller.step();
    assert_eq!(controller.phase(), Phase::ShowWinner);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectMaxBet);
    assert_eq!(
        controller.animations().query(Phase::ShowWinner),
        AnimationState::Stopped
    );
}

#[test]
fn test_collecting_animation_released_on_advance() {
    let panel = ButtonPanel::new();
    let bank = AnimationBank::new().with_slot(Phase::CollectMaxBet, FrameAnimation::new(100));
    let mut controller = RoundController::new(panel.clone(), bank);
    controller.step();
    controller.step();
    assert_eq!(
        controller.animations().query(Phase::CollectMaxBet),
        AnimationState::Running
    );

    // An unfinished animation doesn't hold back bet entry.
    press(&panel, 3, 0, true);
    controller.step();
    assert_eq!(controller.phase(), Phase::CollectHostBet);
    assert_eq!(
        controller.animations().query(Phase::CollectMaxBet),
        AnimationState::Stopped
    );
}

#[test]
fn test_partial_bank_from_vec() {
    let panel = ButtonPanel::new();
    let bank = AnimationBank::try_from(vec![None, Some(FrameAnimation::new(3))]).unwrap();
    let mut controller = RoundController::new(panel.clone(), bank);

    controller.step();
    assert_eq!(controller.phase(), Phase::CollectMaxBet);
    assert_eq!(play_round(&panel, &mut controller, 2, 2, 1), Outcome::Player);
}

#[test]
fn test_boxed_animations_borrowed_bank() {
    let panel = ButtonPanel::new();
    let mut bank = AnimationBank::<Box<dyn Animation>>::new()
        .with_slot(Phase::Start, Box::new(FrameAnimation::new(2)));
    {
        let mut controller = RoundController::new(panel.clone(), &mut bank);
        controller.step();
        controller.step();
        assert_eq!(controller.phase(), Phase::CollectMaxBet);
    }
    assert_eq!(bank.query(Phase::Start), AnimationState::Stopped);
}
