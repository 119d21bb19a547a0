/* src/client/engine/rust/src/scheduler.rs */

//! Deterministic timer queue driven by the host clock.
//!
//! Nothing here sleeps: the host reports elapsed time and the page drains
//! whatever became due, one task at a time, so a task can schedule or cancel
//! others before the next one is picked.

use tracing::trace;

/// Work a timer performs when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
  /// Interval tick: fade the kicker word out.
  KickerFadeOut,
  /// Swap in the next kicker phrase and fade back in.
  KickerAdvance,
  /// Reveal one more heading character.
  TypewriterStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Timer {
  handle: TaskHandle,
  due: u64,
  /// Arming order; breaks ties between timers due at the same instant.
  seq: u64,
  period: Option<u64>,
  task: Task,
}

#[derive(Debug, Default)]
pub struct Scheduler {
  now: u64,
  next_handle: u64,
  next_seq: u64,
  timers: Vec<Timer>,
}

impl Scheduler {
  pub fn new() -> Self {
    Self::default()
  }

  /// Current virtual time in milliseconds.
  pub fn now(&self) -> u64 {
    self.now
  }

  pub fn set_timeout(&mut self, delay_ms: u64, task: Task) -> TaskHandle {
    self.arm(delay_ms, None, task)
  }

  /// Repeat every `period_ms`, first firing one period from now.
  pub fn set_interval(&mut self, period_ms: u64, task: Task) -> TaskHandle {
    let period = period_ms.max(1);
    self.arm(period, Some(period), task)
  }

  fn arm(&mut self, delay_ms: u64, period: Option<u64>, task: Task) -> TaskHandle {
    let handle = TaskHandle(self.next_handle);
    self.next_handle += 1;
    let seq = self.bump_seq();
    self.timers.push(Timer { handle, due: self.now.saturating_add(delay_ms), seq, period, task });
    handle
  }

  fn bump_seq(&mut self) -> u64 {
    let seq = self.next_seq;
    self.next_seq += 1;
    seq
  }

  /// Returns whether a live timer was removed.
  pub fn cancel(&mut self, handle: TaskHandle) -> bool {
    let before = self.timers.len();
    self.timers.retain(|t| t.handle != handle);
    before != self.timers.len()
  }

  pub fn is_pending(&self, handle: TaskHandle) -> bool {
    self.timers.iter().any(|t| t.handle == handle)
  }

  pub fn pending(&self) -> usize {
    self.timers.len()
  }

  /// Due time of the earliest live timer.
  pub fn next_due(&self) -> Option<u64> {
    self.timers.iter().map(|t| t.due).min()
  }

  /// Fire the earliest timer due at or before `until`, moving the clock to
  /// its due time. An interval fires once per call however many periods
  /// fit before `until`; the missed ticks are dropped and it re-arms at
  /// its first slot after `until`. An interval whose next slot is past
  /// the end of the clock is retired.
  pub fn pop_due(&mut self, until: u64) -> Option<(TaskHandle, Task)> {
    let idx = self
      .timers
      .iter()
      .enumerate()
      .filter(|(_, t)| t.due <= until)
      .min_by_key(|(_, t)| (t.due, t.seq))
      .map(|(i, _)| i)?;

    let due = self.timers[idx].due;
    self.now = self.now.max(due);
    let (next_due, skipped) = match self.timers[idx].period {
      Some(period) => {
        let skipped = (until - due) / period;
        let next = skipped
          .checked_add(1)
          .and_then(|k| k.checked_mul(period))
          .and_then(|d| due.checked_add(d));
        (next, skipped)
      }
      None => (None, 0),
    };
    let fired = match next_due {
      Some(next) => {
        let seq = self.bump_seq();
        let timer = &mut self.timers[idx];
        timer.due = next;
        timer.seq = seq;
        (timer.handle, timer.task)
      }
      None => {
        let timer = self.timers.swap_remove(idx);
        (timer.handle, timer.task)
      }
    };
    trace!(at = due, task = ?fired.1, skipped, "timer fired");
    Some(fired)
  }

  /// Move the clock forward without firing anything.
  pub fn advance_to(&mut self, at: u64) {
    self.now = self.now.max(at);
  }
}
