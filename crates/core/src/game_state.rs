//! Game state module - the rules engine
//!
//! [`GameState`] owns the board, the active piece, hold slot, next queue, randomizer,
//! score and timing accumulators for one match. Every operation takes `&mut self`,
//! validates a candidate piece with [`GameState::can_place`] and only then commits it.
//!
//! Player actions report success as `bool`; rejected actions leave the state untouched.
//! Noteworthy happenings are also queued as [`GameEvent`]s for the drive loop to drain.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::kicks::kick_offsets;
use crate::pieces::{get_shape, PieceShape};
use crate::rng::BagRandomizer;
use crate::scoring::{
    calculate_drop_score, calculate_line_score, gravity_interval_ms, level_for_lines,
};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// The falling piece: kind, frame origin and rotation state.
///
/// The origin is the top-left corner of the piece's 4x4 frame and may sit above the
/// playfield (negative `y`) right after spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_COL,
            y: SPAWN_ROW,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute (x, y) of the four occupied cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Copy translated by (dx, dy)
    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    mode: GameMode,
    status: GameStatus,
    board: Board,
    bag: BagRandomizer,
    active: ActivePiece,
    hold: Option<PieceKind>,
    hold_used: bool,
    queue: VecDeque<PieceKind>,
    score: u32,
    lines: u32,
    level: u32,
    elapsed_ms: u32,
    gravity_ms: u32,
    drop_acc_ms: u32,
    lock_acc_ms: u32,
    lock_delay_ms: u32,
    goal_lines: Option<u32>,
    time_limit_ms: Option<u32>,
    /// Edge-triggered; consumers clear it with [`GameState::take_last_clear`].
    last_clear: LastClear,
    /// Events since the last [`GameState::take_events`].
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game seeded from the thread RNG
    pub fn new(mode: GameMode) -> Self {
        Self::with_seed(mode, rand::random())
    }

    /// Create a new game whose piece sequence is determined by `seed`
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_randomizer(mode, BagRandomizer::new(seed))
    }

    /// Create a new game drawing pieces from `bag`; the first piece spawns immediately
    pub fn with_randomizer(mode: GameMode, mut bag: BagRandomizer) -> Self {
        let mut queue = VecDeque::with_capacity(NEXT_QUEUE_LEN + 1);
        let kind = Self::pop_queue(&mut queue, &mut bag);

        Self {
            mode,
            status: GameStatus::Playing,
            board: Board::new(),
            bag,
            active: ActivePiece::spawn(kind),
            hold: None,
            hold_used: false,
            queue,
            score: 0,
            lines: 0,
            level: 1,
            elapsed_ms: 0,
            gravity_ms: gravity_interval_ms(1),
            drop_acc_ms: 0,
            lock_acc_ms: 0,
            lock_delay_ms: LOCK_DELAY_MS,
            goal_lines: mode.goal_lines(),
            time_limit_ms: mode.time_limit_ms(),
            last_clear: LastClear::default(),
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    /// Upcoming pieces, next first. Always at least [`NEXT_QUEUE_LEN`] long.
    pub fn next_queue(&self) -> &VecDeque<PieceKind> {
        &self.queue
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn gravity_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn drop_acc_ms(&self) -> u32 {
        self.drop_acc_ms
    }

    pub fn lock_acc_ms(&self) -> u32 {
        self.lock_acc_ms
    }

    pub fn lock_delay_ms(&self) -> u32 {
        self.lock_delay_ms
    }

    pub fn last_clear(&self) -> LastClear {
        self.last_clear
    }

    /// Observe and reset the last-clear record. Returns `None` when nothing was cleared.
    pub fn take_last_clear(&mut self) -> Option<LastClear> {
        let clear = std::mem::take(&mut self.last_clear);
        (!clear.is_empty()).then_some(clear)
    }

    /// Drain queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Summary of the finished game, `None` while it is still running.
    pub fn summary(&self) -> Option<GameSummary> {
        self.is_over().then(|| self.current_summary())
    }

    /// Summary of the game so far, whether or not it has ended.
    pub fn current_summary(&self) -> GameSummary {
        GameSummary {
            mode: self.mode,
            score: self.score,
            lines: self.lines,
            duration_ms: self.elapsed_ms,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.mode = self.mode;
        out.status = self.status;
        out.board = self.board;
        out.active = self.active;
        out.ghost = self.ghost();
        out.hold = self.hold;
        out.hold_used = self.hold_used;
        for (slot, kind) in out.next_queue.iter_mut().zip(self.queue.iter()) {
            *slot = *kind;
        }
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.elapsed_ms = self.elapsed_ms;
        out.gravity_ms = self.gravity_ms;
        out.last_clear = self.last_clear;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// True iff every cell of `piece` is within the side walls, above the floor, and
    /// either above the playfield or on an empty cell.
    pub fn can_place(&self, piece: &ActivePiece) -> bool {
        piece.cells().iter().all(|&(x, y)| {
            x >= 0
                && x < BOARD_WIDTH as i8
                && y < BOARD_HEIGHT as i8
                && (y < 0 || !self.board.is_occupied(x, y))
        })
    }

    /// Projection of the active piece dropped as far as it fits
    pub fn ghost(&self) -> ActivePiece {
        let mut ghost = self.active;
        while self.can_place(&ghost.shifted(0, 1)) {
            ghost = ghost.shifted(0, 1);
        }
        ghost
    }

    /// Whether the active piece rests on the floor or the stack
    pub fn is_grounded(&self) -> bool {
        !self.can_place(&self.active.shifted(0, 1))
    }

    /// Top the queue up to the look-ahead, pop the next kind, and top it up again.
    fn pop_queue(queue: &mut VecDeque<PieceKind>, bag: &mut BagRandomizer) -> PieceKind {
        while queue.len() < NEXT_QUEUE_LEN {
            queue.push_back(bag.next());
        }
        let kind = match queue.pop_front() {
            Some(kind) => kind,
            None => unreachable!("queue refilled to {NEXT_QUEUE_LEN}"),
        };
        while queue.len() < NEXT_QUEUE_LEN {
            queue.push_back(bag.next());
        }
        kind
    }

    /// Replace the active piece with the next one from the queue.
    fn spawn_next(&mut self) {
        let kind = Self::pop_queue(&mut self.queue, &mut self.bag);
        self.active = ActivePiece::spawn(kind);
    }

    /// Enter the terminal status and announce the summary.
    fn finish(&mut self) {
        self.status = GameStatus::Over;
        self.events.push(GameEvent::GameOver(self.current_summary()));
    }

    /// Pause or resume. Resuming zeroes the drop and lock accumulators so gravity does
    /// not catch up on the paused time. No effect once the game is over.
    pub fn set_paused(&mut self, paused: bool) {
        if self.is_over() {
            return;
        }
        let was_paused = self.status == GameStatus::Paused;
        self.status = if paused {
            GameStatus::Paused
        } else {
            GameStatus::Playing
        };
        if !paused {
            self.drop_acc_ms = 0;
            self.lock_acc_ms = 0;
        }
        match (was_paused, paused) {
            (false, true) => self.events.push(GameEvent::Paused),
            (true, false) => self.events.push(GameEvent::Resumed),
            _ => {}
        }
    }

    /// Flip between playing and paused.
    pub fn toggle_pause(&mut self) {
        self.set_paused(self.status != GameStatus::Paused);
    }

    /// Shift the active piece `dx` columns.
    ///
    /// A successful shift restarts the lock delay, with no limit on the number of resets.
    pub fn move_piece(&mut self, dx: i8) -> bool {
        if !self.is_playing() {
            return false;
        }
        let next = self.active.shifted(dx, 0);
        if !self.can_place(&next) {
            return false;
        }
        self.active = next;
        self.lock_acc_ms = 0;
        self.events.push(GameEvent::Moved { dx });
        true
    }

    /// Rotate the active piece, trying each wall kick of the transition in order.
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        if !self.is_playing() {
            return false;
        }
        let from = self.active.rotation;
        let to = from.rotate(direction);

        for &(dx, dy) in kick_offsets(self.active.kind, from, to) {
            let next = ActivePiece {
                rotation: to,
                ..self.active.shifted(dx, dy)
            };
            if self.can_place(&next) {
                self.active = next;
                self.lock_acc_ms = 0;
                self.events.push(GameEvent::Rotated { rotation: to });
                return true;
            }
        }

        false
    }

    /// Drop the active piece to its resting row, award 2 points per row, and lock.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let mut rows: u32 = 0;
        while self.can_place(&self.active.shifted(0, 1)) {
            self.active = self.active.shifted(0, 1);
            rows += 1;
        }
        self.score += calculate_drop_score(rows, true);
        self.events.push(GameEvent::HardDropped { rows });
        self.lock();
        true
    }

    /// Descend one row, awarding a point when `scoring` is set.
    ///
    /// When the piece cannot descend, one gravity interval is added to the lock
    /// accumulator and the piece locks once it reaches the lock delay. Returns whether
    /// the piece moved down.
    pub fn soft_drop_step(&mut self, scoring: bool) -> bool {
        if !self.is_playing() {
            return false;
        }
        let next = self.active.shifted(0, 1);
        if self.can_place(&next) {
            self.active = next;
            if scoring {
                self.score += calculate_drop_score(1, false);
            }
            return true;
        }

        self.lock_acc_ms = self.lock_acc_ms.saturating_add(self.gravity_ms);
        if self.lock_acc_ms >= self.lock_delay_ms {
            self.lock();
        }
        false
    }

    /// Held soft drop: a scoring step every [`SOFT_DROP_STEP_MS`] of `dt_ms`.
    pub fn soft_drop(&mut self, dt_ms: u32) {
        if !self.is_playing() {
            return;
        }
        self.drop_acc_ms = self.drop_acc_ms.saturating_add(dt_ms);
        while self.drop_acc_ms >= SOFT_DROP_STEP_MS && self.is_playing() {
            self.drop_acc_ms -= SOFT_DROP_STEP_MS;
            self.soft_drop_step(true);
        }
    }

    /// Put the active piece into the hold slot, once per piece.
    ///
    /// With an empty slot the next queued piece spawns; otherwise the held kind swaps in
    /// at the spawn position. A swapped-in piece that does not fit ends the game. The
    /// empty-slot spawn is not checked; only a lock can top out from the queue.
    pub fn hold(&mut self) -> bool {
        if !self.is_playing() || self.hold_used {
            return false;
        }

        let current = self.active.kind;
        let swapped = self.hold.replace(current);
        match swapped {
            None => self.spawn_next(),
            Some(held) => self.active = ActivePiece::spawn(held),
        }
        self.events.push(GameEvent::Held { stored: current });

        if swapped.is_some() && !self.can_place(&self.active) {
            self.finish();
            return true;
        }

        self.hold_used = true;
        self.lock_acc_ms = 0;
        self.drop_acc_ms = 0;
        true
    }

    /// Advance play time by `dt_ms` and apply gravity.
    ///
    /// Ends a time-limit game once its limit is reached. Otherwise each full gravity
    /// interval in the drop accumulator performs one non-scoring step; the loop stops
    /// at the first step that fails to descend.
    pub fn tick(&mut self, dt_ms: u32) {
        self.tick_with_factor(dt_ms, 1);
    }

    /// Like [`GameState::tick`], with gravity running `gravity_factor` times faster.
    ///
    /// Play time still advances by `dt_ms`, so a held soft drop never shortens a
    /// time-limit game.
    pub fn tick_with_factor(&mut self, dt_ms: u32, gravity_factor: u32) {
        if !self.is_playing() {
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if let Some(limit) = self.time_limit_ms {
            if self.elapsed_ms >= limit {
                self.finish();
                return;
            }
        }

        let gravity_dt = dt_ms.saturating_mul(gravity_factor.max(1));
        self.drop_acc_ms = self.drop_acc_ms.saturating_add(gravity_dt);
        let gravity = self.gravity_ms;
        while self.drop_acc_ms >= gravity {
            self.drop_acc_ms -= gravity;
            if !self.soft_drop_step(false) {
                break;
            }
        }
    }

    /// Count `dt_ms` toward the lock delay while the piece rests on something.
    ///
    /// Locks pieces that are grounded but not being pushed by gravity steps.
    pub fn try_lock_if_grounded(&mut self, dt_ms: u32) {
        if !self.is_playing() || !self.is_grounded() {
            return;
        }
        self.lock_acc_ms = self.lock_acc_ms.saturating_add(dt_ms);
        if self.lock_acc_ms >= self.lock_delay_ms {
            self.lock();
        }
    }

    /// Merge the active piece, clear lines, update score/level, and spawn the next piece.
    fn lock(&mut self) {
        let piece = self.active;
        let mut merged = self.board;
        merged.merge(&piece.cells(), piece.kind);

        let clear = merged.clear_full_rows();
        let cleared = clear.count() as u32;
        self.board = clear.board;
        self.events.push(GameEvent::Locked {
            kind: piece.kind,
            lines_cleared: cleared,
        });

        if cleared > 0 {
            self.score += calculate_line_score(cleared as usize, self.level);
            self.lines += cleared;
            self.last_clear = LastClear::new(cleared);

            if let Some(goal) = self.goal_lines {
                if self.lines >= goal {
                    self.finish();
                    return;
                }
            }

            let next_level = level_for_lines(self.lines);
            if next_level != self.level {
                self.level = next_level;
                self.gravity_ms = gravity_interval_ms(self.level);
            }
        } else {
            self.last_clear = LastClear::default();
        }

        self.hold_used = false;
        self.lock_acc_ms = 0;
        self.drop_acc_ms = 0;

        self.spawn_next();
        if !self.can_place(&self.active) {
            self.finish();
        }
    }
}
