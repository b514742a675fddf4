use std::time::Instant;
use termsnake::games::snake::{Cell, Direction, GameConfig, GameState, TickOutcome};

fn seeded(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

#[test]
fn test_straight_run_ends_at_right_wall() {
    let config = seeded(1);
    let mut state = GameState::new(&config);
    let step = config.tick_interval();
    let t0 = Instant::now();

    // head starts at column 16 of 32; 15 moves reach column 31
    let mut tick = 0;
    while !state.is_over() {
        let len_before = state.len();
        let score_before = state.score();
        match state.tick(t0 + step * tick) {
            TickOutcome::Moved => assert_eq!(state.len(), len_before),
            TickOutcome::Ate => {
                assert_eq!(state.len(), len_before + 1);
                assert_eq!(state.score(), score_before + 1);
            }
            TickOutcome::Crashed => {
                assert_eq!(state.head(), Cell::new(31, 12));
                assert_eq!(state.len(), len_before);
            }
            other => panic!("unexpected {other:?}"),
        }
        tick += 1;
    }
    assert_eq!(tick, 16);
}

#[test]
fn test_identical_inputs_replay_identically() {
    let script = [
        Direction::Up,
        Direction::Up,
        Direction::Left,
        Direction::Left,
        Direction::Left,
        Direction::Down,
        Direction::Down,
        Direction::Right,
    ];

    let run = || {
        let config = seeded(2024);
        let mut state = GameState::new(&config);
        let t0 = Instant::now();
        let mut frames = Vec::new();
        for (i, dir) in script.iter().cycle().take(120).enumerate() {
            state.set_direction(*dir);
            state.tick(t0 + config.tick_interval() * i as u32);
            frames.push(state.snapshot());
        }
        frames
    };

    assert_eq!(run(), run());
}

#[test]
fn test_body_never_overlaps_while_alive() {
    let config = seeded(5);
    let mut state = GameState::new(&config);
    let t0 = Instant::now();
    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    for i in 0..400u32 {
        state.set_direction(turns[(i / 3) as usize % turns.len()]);
        if state.tick(t0 + config.tick_interval() * i) == TickOutcome::Finished {
            break;
        }
        if !state.is_over() {
            let body: Vec<Cell> = state.body().iter().copied().collect();
            for (j, a) in body.iter().enumerate() {
                assert!(!body[j + 1..].contains(a), "overlap at {a:?}");
            }
            assert!(state.in_bounds(state.head()));
        }
    }
}
